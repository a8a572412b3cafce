use serde::{Deserialize, Serialize};

/// Message returned when no hospital list could be extracted
pub const EXTRACTION_FAILED: &str = "Could not extract hospital list.";

/// Structured payload for a request whose model output could not be turned
/// into a hospital list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub raw_output: String,
}

impl ErrorResponse {
    /// Extraction failure carrying the untouched first-stage model reply
    pub fn extraction_failed(raw_output: impl Into<String>) -> Self {
        Self {
            error: EXTRACTION_FAILED.to_string(),
            raw_output: raw_output.into(),
        }
    }
}
