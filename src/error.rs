use thiserror::Error;

/// Every way a user action can fail. All variants are non-fatal and end up in
/// the error modal through their `Display` text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectorError {
    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),
    /// The request never produced a usable body.
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-ok status or `success: false`.
    #[error("{0}")]
    Application(String),
}

impl DetectorError {
    pub fn is_validation(&self) -> bool {
        matches!(self, DetectorError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, DetectorError>;
