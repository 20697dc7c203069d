//! Raw event logs as emitted by EVM nodes.

use alloy_primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize};

/// A raw, undecoded event log as received from an RPC node.
/// This is the input to every event decoder; decoders consume it read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// Contract address that emitted the log.
    pub address: Address,
    /// Ordered 32-byte topics. For non-anonymous events, `topics[0]` is the
    /// event signature hash; the remaining topics hold indexed parameters.
    pub topics: Vec<B256>,
    /// ABI-encoded non-indexed parameters.
    pub data: Bytes,
    /// Hash of the block containing this log.
    pub block_hash: B256,
    /// Number of the block containing this log.
    pub block_number: u64,
    /// Hash of the transaction that produced this log.
    pub transaction_hash: B256,
    /// Index of that transaction within its block.
    pub transaction_index: u64,
    /// Index of this log within its block.
    pub log_index: u64,
    /// `true` if the log was removed by a chain reorganization.
    pub removed: bool,
}

impl Log {
    /// `topics[0]` — the event signature hash, if any topics are present.
    pub fn topic0(&self) -> Option<&B256> {
        self.topics.first()
    }
}
