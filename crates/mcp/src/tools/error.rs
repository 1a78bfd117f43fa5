// Errors raised while handling a single tool invocation

use feedbin_sdk::FeedbinError;
use serde_json::{json, Value};

pub type ToolResult<T> = Result<T, ToolError>;

/// Failure of one tool call. Reported back to the caller as an error result;
/// the server keeps running.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Could not reach Feedbin: {0}")]
    Connectivity(String),

    #[error("Feedbin returned status {status}: {body}")]
    RemoteService { status: u16, body: String },

    #[error("Could not decode Feedbin response: {0}")]
    Decode(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Stable machine-readable name of the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Connectivity(_) => "connectivity",
            Self::RemoteService { .. } => "remote_service",
            Self::Decode(_) => "decode",
            Self::NotFound(_) => "not_found",
            Self::Internal(_) => "internal",
        }
    }

    /// JSON body placed in the error result text.
    pub fn to_payload(&self) -> Value {
        let mut payload = json!({
            "error": self.kind(),
            "message": self.to_string(),
        });
        if let Self::RemoteService { status, body } = self {
            payload["status"] = json!(status);
            payload["body"] = json!(body);
        }
        payload
    }
}

impl From<FeedbinError> for ToolError {
    fn from(err: FeedbinError) -> Self {
        match err {
            FeedbinError::Connectivity(e) => Self::Connectivity(e.to_string()),
            FeedbinError::Api { status, body } => Self::RemoteService { status, body },
            FeedbinError::Decode(e) => Self::Decode(e.to_string()),
            FeedbinError::NotFound(what) => Self::NotFound(what),
            FeedbinError::InvalidInput(msg) => Self::InvalidArgument(msg),
            other @ (FeedbinError::Config(_) | FeedbinError::InvalidUrl(_)) => {
                Self::Internal(other.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_payload_keeps_status_and_body() {
        let err = ToolError::from(FeedbinError::from_response(502, "Bad Gateway"));
        let payload = err.to_payload();

        assert_eq!(payload["error"], "remote_service");
        assert_eq!(payload["status"], 502);
        assert_eq!(payload["body"], "Bad Gateway");
    }

    #[test]
    fn test_sdk_errors_map_to_tool_errors() {
        assert!(matches!(
            ToolError::from(FeedbinError::InvalidInput("empty".into())),
            ToolError::InvalidArgument(_)
        ));
        assert!(matches!(
            ToolError::from(FeedbinError::NotFound("feed 1".into())),
            ToolError::NotFound(_)
        ));
        assert_eq!(ToolError::NotFound("x".into()).to_payload().get("status"), None);
    }
}
