//! Tracer configurations for `debug_traceCall`.
//!
//! The result type of a trace is parameterized by its tracer: each
//! `TracerConfig` names the tracer to run and knows how to parse the raw
//! output the node returns for it.

use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RpcError;

/// A tracer selection plus its typed output parser.
pub trait TracerConfig: Send + Sync {
    type Output;

    /// The `tracer`/`tracerConfig` JSON object passed as the last
    /// `debug_traceCall` parameter.
    fn to_rpc_params(&self) -> Value;

    /// Parse the node's raw tracer output.
    fn parse_output(&self, raw: Value) -> Result<Self::Output, RpcError>;
}

/// The geth `callTracer` — produces a tree of call frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallTracer {
    /// Only trace the top-level call, skipping sub-calls.
    pub only_top_call: bool,
    /// Include logs emitted during the traced call.
    pub with_log: bool,
}

impl TracerConfig for CallTracer {
    type Output = CallFrame;

    fn to_rpc_params(&self) -> Value {
        serde_json::json!({
            "tracer": "callTracer",
            "tracerConfig": {
                "onlyTopCall": self.only_top_call,
                "withLog": self.with_log,
            },
        })
    }

    fn parse_output(&self, raw: Value) -> Result<Self::Output, RpcError> {
        Ok(serde_json::from_value(raw)?)
    }
}

/// One frame of a `callTracer` result. Sub-calls nest recursively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallFrame {
    #[serde(rename = "type")]
    pub call_type: String,
    pub from: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    pub gas: U256,
    pub gas_used: U256,
    pub input: Bytes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Bytes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revert_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub calls: Vec<CallFrame>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logs: Vec<CallLogFrame>,
}

/// A log entry captured inside a call frame (`withLog: true`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallLogFrame {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
}
