//! State and block overrides for simulated calls.
//!
//! Overrides patch account state or block context for the duration of a
//! single `eth_call` / `debug_traceCall` simulation. They never touch chain
//! state.

use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-account state patches applied during a simulation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Replacement bytecode for the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Bytes>,
    /// Full storage replacement (clears all other slots).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<HashMap<B256, B256>>,
    /// Sparse storage patch (other slots keep their values).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_diff: Option<HashMap<B256, B256>>,
}

/// Account overrides keyed by address.
pub type StateOverride = HashMap<Address, AccountOverride>;

/// Block-context patches applied during a simulation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coinbase: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_fee: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random: Option<B256>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_override_omits_unset_fields() {
        let ovr = AccountOverride {
            balance: Some(U256::from(1_000u64)),
            ..Default::default()
        };
        let json = serde_json::to_string(&ovr).unwrap();
        assert!(json.contains("balance"));
        assert!(!json.contains("stateDiff"));
    }
}
