//! Error types for the ProcessOut client

use thiserror::Error;

/// Result type alias for ProcessOut operations
pub type Result<T> = std::result::Result<T, ProcessOutError>;

/// Main error type for ProcessOut operations
#[derive(Error, Debug)]
pub enum ProcessOutError {
    /// The request body could not be encoded to JSON
    #[error("failed to encode request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The request could not be assembled (bad URL, bad header value)
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// Transport failure, passed through as reported by the HTTP client
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body is not a valid envelope
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope reported success but the expected payload field is absent
    #[error("response is missing the `{key}` field")]
    MissingPayload { key: String },

    /// The API answered with `success: false`
    #[error("{message}")]
    Api { message: String },

    /// Client configuration error
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl ProcessOutError {
    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a missing payload error
    pub fn missing_payload(key: impl Into<String>) -> Self {
        Self::MissingPayload { key: key.into() }
    }

    /// Create an API error from the envelope message
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the error was reported by the API itself
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// The vendor-supplied message, if this is an API error
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message } => Some(message),
            _ => None,
        }
    }
}
