//! Transport-level error types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The error object of a JSON-RPC error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: i64,
    pub message: String,
    /// Structured error data, if the node attached any. Execution reverts
    /// usually carry the revert payload here as a hex string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl std::fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RPC error {}: {}", self.code, self.message)
    }
}

/// Errors that can occur during an RPC provider operation.
///
/// This type propagates opaquely through the contract layer: nothing here is
/// retried or rewritten, classification into contract-level failures happens
/// in `chaincall-errors`.
#[derive(Debug, Error)]
pub enum RpcError {
    /// Request never produced a response (connection refused, dropped, etc.).
    #[error("transport error: {0}")]
    Transport(String),

    /// The node answered with a JSON-RPC error object.
    #[error("{0}")]
    ErrorResponse(ErrorPayload),

    /// Request timed out after the configured duration.
    #[error("request timed out after {ms}ms")]
    Timeout { ms: u64 },

    /// Response could not be deserialized.
    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// An unexpected error.
    #[error("{0}")]
    Other(String),
}

impl RpcError {
    /// Returns `true` if the node itself reported an execution-level error
    /// (as opposed to the request failing in transit).
    pub fn is_execution_error(&self) -> bool {
        matches!(self, Self::ErrorResponse(_))
    }

    /// The human-readable error message.
    pub fn message(&self) -> String {
        match self {
            Self::ErrorResponse(payload) => payload.message.clone(),
            other => other.to_string(),
        }
    }

    /// The structured error data attached by the node, if any.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::ErrorResponse(payload) => payload.data.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_error_flag() {
        let err = RpcError::ErrorResponse(ErrorPayload {
            code: 3,
            message: "execution reverted".into(),
            data: None,
        });
        assert!(err.is_execution_error());
        assert!(!RpcError::Transport("connection refused".into()).is_execution_error());
    }

    #[test]
    fn data_only_on_error_response() {
        let err = RpcError::ErrorResponse(ErrorPayload {
            code: 3,
            message: "execution reverted".into(),
            data: Some(Value::String("0xdeadbeef".into())),
        });
        assert_eq!(err.data(), Some(&Value::String("0xdeadbeef".into())));
        assert!(RpcError::Timeout { ms: 5000 }.data().is_none());
    }
}
