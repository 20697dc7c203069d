//! The contract-failure taxonomy.

use alloy_core::dyn_abi::DynSolValue;
use chaincall_core::RpcError;
use std::fmt;
use thiserror::Error;

/// A decoded Solidity custom error: its name and decoded argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedCustomError {
    /// Error name, e.g. `"InsufficientBalance"`.
    pub name: String,
    /// Decoded arguments: (param name, value), declaration order.
    pub fields: Vec<(String, DynSolValue)>,
}

impl fmt::Display for DecodedCustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self
            .fields
            .iter()
            .map(|(name, value)| format!("{name}={}", render_value(value)))
            .collect();
        write!(f, "{}({})", self.name, args.join(", "))
    }
}

fn render_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Address(a) => format!("{a}"),
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::Uint(v, _) => v.to_string(),
        DynSolValue::Int(v, _) => v.to_string(),
        DynSolValue::String(s) => s.clone(),
        DynSolValue::Bytes(b) => format!("0x{}", hex::encode(b)),
        DynSolValue::FixedBytes(word, size) => format!("0x{}", hex::encode(&word[..*size])),
        other => format!("{other:?}"),
    }
}

/// A failed contract call or simulation.
///
/// Returned as the failure branch of a `Result`, never raised as
/// control flow: revert outcomes are data to the caller.
#[derive(Debug, Error)]
pub enum ContractError {
    /// Execution reverted with no reason available.
    #[error("execution reverted")]
    ExecutionReverted,

    /// Execution reverted with a human-readable reason string.
    #[error("reverted: {0}")]
    Revert(String),

    /// Execution reverted with a registered Solidity custom error.
    #[error("reverted: {0}")]
    Custom(DecodedCustomError),

    /// Not a contract-level failure: the transport error, wrapped opaquely.
    #[error(transparent)]
    Rpc(#[from] RpcError),
}

impl ContractError {
    /// `true` for the revert-family variants (a contract rejected the
    /// call), `false` for transport-tier failures.
    pub fn is_revert(&self) -> bool {
        !matches!(self, Self::Rpc(_))
    }

    /// The decoded custom error, if this is one.
    pub fn as_custom(&self) -> Option<&DecodedCustomError> {
        match self {
            Self::Custom(inner) => Some(inner),
            _ => None,
        }
    }
}
