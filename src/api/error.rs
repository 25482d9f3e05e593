//! API Errors
//!
//! Transport and application failures share one type; the UI only ever
//! shows `raw_text()`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Envelope came back with `status != "success"`
    #[error("{0}")]
    Rejected(String),

    #[error("Request timed out after {0}ms")]
    Timeout(u32),

    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    /// Text surfaced to the user: the server's raw body where there is one
    pub fn raw_text(&self) -> String {
        match self {
            ApiError::Status { status, body } if body.trim().is_empty() => format!("HTTP {}", status),
            ApiError::Status { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_text_uses_body() {
        let err = ApiError::Status { status: 500, body: "{\"status\":\"error\"}".into() };
        assert_eq!(err.raw_text(), "{\"status\":\"error\"}");
    }

    #[test]
    fn test_raw_text_empty_body() {
        let err = ApiError::Status { status: 502, body: "  ".into() };
        assert_eq!(err.raw_text(), "HTTP 502");
    }

    #[test]
    fn test_raw_text_other_variants() {
        assert_eq!(ApiError::Timeout(15000).raw_text(), "Request timed out after 15000ms");
        assert_eq!(ApiError::Rejected("Invalid credentials".into()).raw_text(), "Invalid credentials");
        assert_eq!(ApiError::Network("offline".into()).raw_text(), "offline");
    }
}
