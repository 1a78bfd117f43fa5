//! Error types for the Feedbin SDK.

/// Result type for SDK operations.
pub type FeedbinResult<T> = Result<T, FeedbinError>;

/// Error types that can occur when talking to Feedbin.
#[derive(Debug, thiserror::Error)]
pub enum FeedbinError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Connectivity error: {0}")]
    Connectivity(#[from] reqwest::Error),

    /// Feedbin answered with a non-2xx status.
    #[error("Remote service error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// A 2xx response carried a body that is not the expected JSON.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid input, rejected before any request is sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl FeedbinError {
    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Turn a 404 from a single-resource lookup into `NotFound`.
    pub(crate) fn not_found_as(self, resource: impl FnOnce() -> String) -> Self {
        match self {
            Self::Api { status: 404, .. } => Self::NotFound(resource()),
            other => other,
        }
    }
}
