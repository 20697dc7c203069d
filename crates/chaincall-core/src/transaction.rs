//! Transaction shapes along the write path: filled, signed, and pending.

use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

use crate::request::AccessListItem;

/// Gas pricing of a transaction — legacy single price, or EIP-1559 caps.
/// Exactly one form is ever present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GasFees {
    Legacy { gas_price: u128 },
    DynamicFee { fee_cap: u128, tip_cap: u128 },
}

/// A fully parameterized transaction, ready to be signed.
///
/// Produced either locally (every field already set on the builder) or by
/// the provider's fill operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedTransaction {
    pub chain_id: u64,
    pub nonce: u64,
    pub gas: u64,
    pub fees: GasFees,
    /// `None` for contract creation.
    pub to: Option<Address>,
    pub value: U256,
    pub data: Bytes,
    pub access_list: Vec<AccessListItem>,
}

/// A signed transaction carrying its raw wire encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    pub payload: UnsignedTransaction,
    /// Address recovered from / used for the signature.
    pub from: Address,
    /// RLP-encoded signed transaction, as submitted via
    /// `eth_sendRawTransaction`.
    pub raw: Bytes,
    /// Transaction hash.
    pub hash: B256,
}

/// A submitted-but-not-yet-included transaction.
///
/// This layer performs no waiting: inclusion/await semantics belong to
/// whatever wraps this handle (see the send-handler seam in
/// `chaincall-contract`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransaction {
    pub hash: B256,
}

impl PendingTransaction {
    pub fn new(hash: B256) -> Self {
        Self { hash }
    }
}
