use serde::{Deserialize, Serialize};

use super::core::{post_json, Fallbacks};
use crate::config::ClientConfig;
use crate::error::Result;

// ============================================================================
// Single Text
// ============================================================================

pub const ANALYZE_PATH: &str = "/analyze";

pub(crate) const ANALYZE_FALLBACKS: Fallbacks = Fallbacks {
    http: "An error occurred while analyzing the text.",
    application: "Failed to analyze text.",
};

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub text: &'a str,
}

/// Verdict for one text. Percentages are in `0..=100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub is_fake: bool,
    pub label: String,
    pub confidence: f64,
    pub probability_fake: f64,
    pub probability_real: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    pub result: AnalysisResult,
}

pub async fn analyze_text(config: &ClientConfig, text: &str) -> Result<AnalysisResult> {
    let url = config.endpoint(ANALYZE_PATH);
    let response: AnalyzeResponse =
        post_json(&url, &AnalyzeRequest { text }, ANALYZE_FALLBACKS).await?;
    Ok(response.result)
}

// ============================================================================
// Batch
// ============================================================================

pub const BATCH_ANALYZE_PATH: &str = "/batch-analyze";

const BATCH_FALLBACKS: Fallbacks = Fallbacks {
    http: "An error occurred while analyzing the batch.",
    application: "Failed to analyze batch.",
};

#[derive(Debug, Clone, Serialize)]
pub struct BatchAnalyzeRequest<'a> {
    pub texts: &'a [String],
}

/// One row of a batch reply. `text` is a preview the server may truncate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResultItem {
    pub text: String,
    pub is_fake: bool,
    pub label: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchResponse {
    #[serde(default)]
    pub results: Vec<BatchResultItem>,
}

pub async fn batch_analyze(
    config: &ClientConfig,
    texts: &[String],
) -> Result<Vec<BatchResultItem>> {
    let url = config.endpoint(BATCH_ANALYZE_PATH);
    let response: BatchResponse =
        post_json(&url, &BatchAnalyzeRequest { texts }, BATCH_FALLBACKS).await?;
    Ok(response.results)
}
