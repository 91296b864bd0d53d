//! Input checks that run before any request is sent.

use crate::error::{DetectorError, Result};
use crate::utils::formatting::code_unit_len;

/// Trim `text` and require at least `min_len` code units.
pub fn validate_analysis_text(text: &str, min_len: usize) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || code_unit_len(trimmed) < min_len {
        return Err(DetectorError::Validation(format!(
            "Please enter at least {min_len} characters of text to analyze."
        )));
    }
    Ok(trimmed.to_string())
}

pub fn validate_query(query: &str) -> Result<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(DetectorError::Validation(
            "Please enter a search query.".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Split batch input into one text per non-blank line.
pub fn validate_batch(input: &str, max_texts: usize) -> Result<Vec<String>> {
    let texts: Vec<String> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if texts.is_empty() {
        return Err(DetectorError::Validation(
            "Please enter at least one text to analyze.".to_string(),
        ));
    }
    if texts.len() > max_texts {
        return Err(DetectorError::Validation(format!(
            "Maximum {max_texts} texts allowed at once."
        )));
    }
    Ok(texts)
}
