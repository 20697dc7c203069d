//! Error types for the ABI decode pipeline.

use thiserror::Error;

/// Errors that can occur while decoding a log against an event signature.
///
/// These are codec-level failures (malformed payloads, topic/type
/// mismatches at the byte level) and propagate opaquely. A log that simply
/// does not match a signature is *not* an error — matching returns `None`.
#[derive(Debug, Error)]
pub enum AbiError {
    #[error("ABI decode failed: {reason}")]
    DecodeFailed { reason: String },

    #[error("topic {index} decode failed: {reason}")]
    TopicDecodeFailed { index: usize, reason: String },

    #[error("expected {expected} decoded values, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("value mismatch for field `{field}`: {reason}")]
    ValueMismatch { field: String, reason: String },
}
