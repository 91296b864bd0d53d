use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{DetectorError, Result};

// ============================================================================
// Response Envelope
// ============================================================================

/// Messages shown when the server fails without saying why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallbacks {
    /// Non-2xx status without an `error` field.
    pub http: &'static str,
    /// `success: false` without an `error` field.
    pub application: &'static str,
}

/// The fields every endpoint shares. Anything else is endpoint specific.
#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Turn a raw HTTP outcome into a typed payload or a [`DetectorError`].
///
/// Order matters: a non-ok status wins over the body's `success` flag, and the
/// server's own `error` string wins over the fallback text.
pub fn interpret_response<R: DeserializeOwned>(
    status_ok: bool,
    body: &str,
    fallbacks: Fallbacks,
) -> Result<R> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !status_ok => {
            return Err(DetectorError::Application(fallbacks.http.to_string()));
        }
        Err(e) => {
            return Err(DetectorError::Transport(format!(
                "Received an invalid response from the server: {e}"
            )));
        }
    };

    let envelope: Envelope = serde_json::from_value(value.clone()).unwrap_or_default();
    let server_error = envelope.error.filter(|e| !e.is_empty());

    if !status_ok {
        return Err(DetectorError::Application(
            server_error.unwrap_or_else(|| fallbacks.http.to_string()),
        ));
    }
    if !envelope.success {
        return Err(DetectorError::Application(
            server_error.unwrap_or_else(|| fallbacks.application.to_string()),
        ));
    }

    serde_json::from_value(value).map_err(|e| {
        DetectorError::Transport(format!("Unexpected response from the server: {e}"))
    })
}

// ============================================================================
// Transport
// ============================================================================

/// POST `body` as JSON to `url` and interpret the reply.
pub async fn post_json<B: Serialize, R: DeserializeOwned>(
    url: &str,
    body: &B,
    fallbacks: Fallbacks,
) -> Result<R> {
    let request = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| DetectorError::Transport(format!("Failed to encode request: {e}")))?;

    let response = request
        .send()
        .await
        .map_err(|e| DetectorError::Transport(e.to_string()))?;

    let status_ok = response.ok();
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| DetectorError::Transport(e.to_string()))?;

    if !status_ok {
        log::warn!("POST {url} returned HTTP {status}");
    }

    interpret_response(status_ok, &text, fallbacks)
}
