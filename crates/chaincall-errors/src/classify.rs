//! Classification of raw RPC failures into the contract-error taxonomy.
//!
//! Classification priority:
//! 1. Not an execution error and no revert-shaped message → opaque `Rpc`
//! 2. Revert-shaped message with no structured payload → `ExecutionReverted`
//! 3. Textual payload, valid hex → custom-error directory lookup by selector
//! 4. Textual payload, not hex → `Revert(reason)` verbatim
//! 5. Anything else → opaque `Rpc`
//!
//! Hex-shaped payloads are assumed to be encoded custom errors *before*
//! being treated as literal text.

use chaincall_core::RpcError;
use serde_json::Value;
use tracing::debug;

use crate::registry::{global_registry, ErrorRegistry};
use crate::types::ContractError;

/// Classify a failed `eth_call`/simulation error against the process-wide
/// custom-error directory.
pub fn classify_call_failure(err: RpcError) -> ContractError {
    classify_with(err, global_registry())
}

/// Classify a failed `eth_call`/simulation error against an explicit
/// custom-error directory.
pub fn classify_with(err: RpcError, registry: &dyn ErrorRegistry) -> ContractError {
    let is_revert_message = err
        .message()
        .to_ascii_lowercase()
        .contains("execution revert");

    if err.is_execution_error() || is_revert_message {
        match err.data() {
            None if is_revert_message => return ContractError::ExecutionReverted,

            Some(Value::String(text)) => {
                // Not valid hex — the node already decoded the reason.
                if !is_valid_hex(text) {
                    return ContractError::Revert(text.clone());
                }

                // Hex-shaped: try the directory before giving up.
                if let Ok(bytes) = hex::decode(text.strip_prefix("0x").unwrap_or(text)) {
                    if let Some(custom) = registry.decode(&bytes) {
                        return ContractError::Custom(custom);
                    }
                    debug!(payload = %text, "revert payload did not match any registered custom error");
                }
            }

            _ => {}
        }
    }

    ContractError::Rpc(err)
}

/// `true` if `text` is a well-formed hex string (optionally `0x`-prefixed,
/// even length, hex digits only). An empty payload after the prefix is not
/// considered hex.
pub fn is_valid_hex(text: &str) -> bool {
    let digits = text.strip_prefix("0x").unwrap_or(text);
    !digits.is_empty() && digits.len() % 2 == 0 && digits.chars().all(|c| c.is_ascii_hexdigit())
}
