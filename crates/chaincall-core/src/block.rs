//! Block selectors for point-in-time queries.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A named block tag understood by all JSON-RPC nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    Latest,
    Earliest,
    Pending,
    Safe,
    Finalized,
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BlockTag::Latest => "latest",
            BlockTag::Earliest => "earliest",
            BlockTag::Pending => "pending",
            BlockTag::Safe => "safe",
            BlockTag::Finalized => "finalized",
        };
        write!(f, "{s}")
    }
}

/// Selects the block a read-only call is executed against: a block hash,
/// a block number, or a named tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockId {
    Hash(B256),
    Number(u64),
    Tag(BlockTag),
}

impl BlockId {
    /// The selector encoded as a JSON-RPC parameter value.
    ///
    /// Hashes map to the EIP-1898 object form; numbers to hex quantities;
    /// tags to their string names.
    pub fn to_rpc_param(&self) -> Value {
        match self {
            BlockId::Hash(hash) => serde_json::json!({ "blockHash": format!("{hash}") }),
            BlockId::Number(n) => Value::String(format!("{n:#x}")),
            BlockId::Tag(tag) => Value::String(tag.to_string()),
        }
    }
}

impl From<B256> for BlockId {
    fn from(hash: B256) -> Self {
        Self::Hash(hash)
    }
}

impl From<u64> for BlockId {
    fn from(number: u64) -> Self {
        Self::Number(number)
    }
}

impl From<BlockTag> for BlockId {
    fn from(tag: BlockTag) -> Self {
        Self::Tag(tag)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockId::Hash(h) => write!(f, "{h}"),
            BlockId::Number(n) => write!(f, "{n}"),
            BlockId::Tag(t) => write!(f, "{t}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_to_hex_quantity() {
        let id: BlockId = 19_000_000u64.into();
        assert_eq!(id.to_rpc_param(), Value::String("0x121eac0".into()));
    }

    #[test]
    fn tag_to_string() {
        let id: BlockId = BlockTag::Finalized.into();
        assert_eq!(id.to_rpc_param(), Value::String("finalized".into()));
    }

    #[test]
    fn hash_to_eip1898_object() {
        let id: BlockId = B256::repeat_byte(0xab).into();
        let param = id.to_rpc_param();
        assert!(param["blockHash"].as_str().unwrap().starts_with("0xabab"));
    }
}
