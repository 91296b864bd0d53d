use serde::{Deserialize, Serialize};

use super::core::{post_json, Fallbacks};
use crate::config::ClientConfig;
use crate::error::Result;

pub const SEARCH_NEWS_PATH: &str = "/search-news";

pub(crate) const SEARCH_FALLBACKS: Fallbacks = Fallbacks {
    http: "An error occurred while searching for news.",
    application: "Failed to search news.",
};

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

/// A news item found by the backend, with its verdict attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub source: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub is_fake: bool,
    pub label: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability_fake: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability_real: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub results: Vec<SearchResultItem>,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub total_results: u32,
}

pub async fn search_news(config: &ClientConfig, query: &str) -> Result<SearchResponse> {
    let url = config.endpoint(SEARCH_NEWS_PATH);
    post_json(&url, &SearchRequest { query }, SEARCH_FALLBACKS).await
}
