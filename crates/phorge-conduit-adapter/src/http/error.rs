/*
[INPUT]:  Error sources (HTTP, Conduit envelopes, serialization, pagination)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

use crate::http::capabilities::PageStyle;

/// Main error type for the Conduit adapter
#[derive(Error, Debug)]
pub enum ConduitError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Conduit returned an error envelope
    #[error("Conduit error {code}: {info}")]
    Api { code: String, info: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request construction was handed malformed input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Method is not present in the client's capability table
    #[error("Unknown Conduit method: {method}")]
    UnknownMethod { method: String },

    /// Method exists but does not use the requested pagination style
    #[error("Method {method} does not use {expected:?} pagination")]
    PaginationMismatch { method: String, expected: PageStyle },

    /// Paginated call exceeded the configured page bound
    #[error("Method {method} exceeded the page limit of {limit} pages")]
    PageLimitExceeded { method: String, limit: u32 },
}

impl ConduitError {
    /// Check if the error indicates a rejected or missing API token
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            ConduitError::Api { code, .. }
                if code == "ERR-INVALID-AUTH"
                    || code == "ERR-INVALID-TOKEN"
                    || code == "ERR-INVALID-SESSION"
        )
    }

    /// Create an API error from an envelope's code and info
    pub fn api_error(code: impl Into<String>, info: impl Into<String>) -> Self {
        ConduitError::Api {
            code: code.into(),
            info: info.into(),
        }
    }
}

/// Result type alias for Conduit operations
pub type Result<T> = std::result::Result<T, ConduitError>;
