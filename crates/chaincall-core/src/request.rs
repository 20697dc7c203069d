//! Call/transaction parameter record.

use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::transaction::{GasFees, UnsignedTransaction};

/// One entry of an EIP-2930 access list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessListItem {
    pub address: Address,
    pub storage_keys: Vec<B256>,
}

/// The mutable parameter record behind every contract call.
///
/// A `CallRequest` is owned by exactly one call builder at a time; everything
/// handed out to callers is an independent clone, so mutating a snapshot
/// never affects the builder and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallRequest {
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub value: Option<U256>,
    pub gas: Option<u64>,
    pub gas_price: Option<u128>,
    pub gas_fee_cap: Option<u128>,
    pub gas_tip_cap: Option<u128>,
    pub nonce: Option<u64>,
    pub data: Option<Bytes>,
    pub access_list: Vec<AccessListItem>,
    pub chain_id: Option<u64>,
}

impl CallRequest {
    /// Encode as the JSON object expected by `eth_call`, `eth_estimateGas`
    /// and friends: addresses and byte strings as `0x`-hex, quantities as
    /// minimal hex numbers. Unset fields are omitted.
    pub fn to_rpc_params(&self) -> Value {
        let mut obj = Map::new();
        if let Some(from) = &self.from {
            obj.insert("from".into(), Value::String(format!("{from}")));
        }
        if let Some(to) = &self.to {
            obj.insert("to".into(), Value::String(format!("{to}")));
        }
        if let Some(value) = &self.value {
            obj.insert("value".into(), Value::String(format!("{value:#x}")));
        }
        if let Some(gas) = self.gas {
            obj.insert("gas".into(), Value::String(format!("{gas:#x}")));
        }
        if let Some(gas_price) = self.gas_price {
            obj.insert("gasPrice".into(), Value::String(format!("{gas_price:#x}")));
        }
        if let Some(fee_cap) = self.gas_fee_cap {
            obj.insert("maxFeePerGas".into(), Value::String(format!("{fee_cap:#x}")));
        }
        if let Some(tip_cap) = self.gas_tip_cap {
            obj.insert(
                "maxPriorityFeePerGas".into(),
                Value::String(format!("{tip_cap:#x}")),
            );
        }
        if let Some(nonce) = self.nonce {
            obj.insert("nonce".into(), Value::String(format!("{nonce:#x}")));
        }
        if let Some(data) = &self.data {
            obj.insert("data".into(), Value::String(format!("{data}")));
        }
        if !self.access_list.is_empty() {
            obj.insert(
                "accessList".into(),
                serde_json::to_value(&self.access_list).unwrap_or(Value::Null),
            );
        }
        if let Some(chain_id) = self.chain_id {
            obj.insert("chainId".into(), Value::String(format!("{chain_id:#x}")));
        }
        Value::Object(obj)
    }

    /// The gas pricing of this request: `gas_price` XOR both EIP-1559 caps.
    /// Returns `None` when neither form is fully set, or when both are set.
    pub fn gas_fees(&self) -> Option<GasFees> {
        match (self.gas_price, self.gas_fee_cap, self.gas_tip_cap) {
            (Some(gas_price), None, None) => Some(GasFees::Legacy { gas_price }),
            (None, Some(fee_cap), Some(tip_cap)) => Some(GasFees::DynamicFee { fee_cap, tip_cap }),
            _ => None,
        }
    }

    /// Convert into an unsigned transaction, if every field required for
    /// signing is set: `nonce`, `gas`, a complete gas pricing, and the
    /// pinned `chain_id`. Returns `None` otherwise — never a partially
    /// populated transaction.
    pub fn to_unsigned_transaction(&self) -> Option<UnsignedTransaction> {
        let nonce = self.nonce?;
        let gas = self.gas?;
        let fees = self.gas_fees()?;
        let chain_id = self.chain_id?;
        Some(UnsignedTransaction {
            chain_id,
            nonce,
            gas,
            fees,
            to: self.to,
            value: self.value.unwrap_or(U256::ZERO),
            data: self.data.clone().unwrap_or_default(),
            access_list: self.access_list.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_request() -> CallRequest {
        CallRequest {
            to: Some(Address::repeat_byte(0x22)),
            gas: Some(100_000),
            gas_price: Some(30_000_000_000),
            nonce: Some(7),
            data: Some(Bytes::from(vec![0xa9, 0x05, 0x9c, 0xbb])),
            chain_id: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn rpc_params_hex_quantities() {
        let params = ready_request().to_rpc_params();
        assert_eq!(params["gas"], "0x186a0");
        assert_eq!(params["nonce"], "0x7");
        assert_eq!(params["chainId"], "0x1");
        assert!(params.get("value").is_none());
        assert!(params.get("accessList").is_none());
    }

    #[test]
    fn unsigned_transaction_when_ready() {
        let tx = ready_request().to_unsigned_transaction().unwrap();
        assert_eq!(tx.nonce, 7);
        assert_eq!(tx.gas, 100_000);
        assert!(matches!(tx.fees, GasFees::Legacy { gas_price } if gas_price == 30_000_000_000));
    }

    #[test]
    fn unsigned_transaction_missing_nonce() {
        let mut req = ready_request();
        req.nonce = None;
        assert!(req.to_unsigned_transaction().is_none());
    }

    #[test]
    fn gas_fees_reject_mixed_pricing() {
        let mut req = ready_request();
        req.gas_fee_cap = Some(40_000_000_000);
        req.gas_tip_cap = Some(2_000_000_000);
        // gas_price and both caps set at once — ambiguous, not ready
        assert!(req.gas_fees().is_none());

        req.gas_price = None;
        assert!(matches!(req.gas_fees(), Some(GasFees::DynamicFee { .. })));
    }

    #[test]
    fn snapshot_is_independent() {
        let original = ready_request();
        let mut snapshot = original.clone();
        snapshot.nonce = Some(99);
        assert_eq!(original.nonce, Some(7));
    }
}
