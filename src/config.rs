use serde::{Deserialize, Serialize};

/// Id of the inline `<script type="application/json">` element that may carry
/// overrides for [`ClientConfig`].
pub const CONFIG_ELEMENT_ID: &str = "detector-config";

/// Client-side settings. Every field has a default so the host page only
/// needs to supply what it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for the endpoint paths. Empty means same origin.
    pub api_base: String,
    /// Minimum trimmed length (UTF-16 code units) accepted for analysis.
    pub min_text_length: usize,
    /// Delay before the confidence meter animates to its value.
    pub meter_delay_ms: u32,
    /// Largest number of texts the batch tab will submit at once.
    pub max_batch_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            min_text_length: 10,
            meter_delay_ms: 100,
            max_batch_size: 10,
        }
    }
}

impl ClientConfig {
    /// Load overrides from the host page.
    /// Returns `Default` if the element is missing or unparseable.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => Self::from_json(&raw),
            None => {
                log::debug!("No #{CONFIG_ELEMENT_ID} element, using default config");
                Self::default()
            }
        }
    }

    pub fn from_json(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<Self>(raw) {
            Ok(config) => {
                log::info!("Loaded client config: {config:?}");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse #{CONFIG_ELEMENT_ID}: {e}, using defaults");
                Self::default()
            }
        }
    }

    /// Join `path` onto `api_base` without doubling the slash.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base, "");
        assert_eq!(config.min_text_length, 10);
        assert_eq!(config.meter_delay_ms, 100);
        assert_eq!(config.max_batch_size, 10);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = ClientConfig::from_json(r#"{"api_base": "https://api.example.com/"}"#);
        assert_eq!(config.api_base, "https://api.example.com/");
        assert_eq!(config.min_text_length, 10);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(ClientConfig::from_json("{not json"), ClientConfig::default());
        assert_eq!(ClientConfig::from_json("   "), ClientConfig::default());
    }

    #[test]
    fn test_endpoint_same_origin() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint("/analyze"), "/analyze");
        assert_eq!(config.endpoint("search-news"), "/search-news");
    }

    #[test]
    fn test_endpoint_with_base() {
        let config = ClientConfig {
            api_base: "https://api.example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.endpoint("/analyze"), "https://api.example.com/analyze");
    }
}
