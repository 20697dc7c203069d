//! The read execution path: point-in-time simulation and tracing.

use alloy_primitives::{Address, Bytes};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

use chaincall_abi::AbiError;
use chaincall_core::{
    BlockId, BlockOverride, CallRequest, Provider, RpcError, StateOverride, TracerConfig,
};
use chaincall_errors::{classify_call_failure, ContractError};

use crate::builder::CallBuilder;

/// Decodes the raw return data of a call into a typed value.
///
/// Generated bindings implement this per function output; the identity
/// implementation on [`Bytes`] serves untyped calls.
pub trait DecodeCallResult: Sized {
    fn decode_call_result(data: &[u8]) -> Result<Self, AbiError>;
}

impl DecodeCallResult for Bytes {
    fn decode_call_result(data: &[u8]) -> Result<Self, AbiError> {
        Ok(Bytes::from(data.to_vec()))
    }
}

impl DecodeCallResult for () {
    fn decode_call_result(_data: &[u8]) -> Result<Self, AbiError> {
        Ok(())
    }
}

/// A read-only contract call — the Solidity `view`/`pure` case.
///
/// Owns its [`CallRequest`] exclusively; the chain id is pinned from the
/// provider at construction.
pub struct ReadCall<C> {
    provider: Arc<dyn Provider>,
    request: CallRequest,
    _output: PhantomData<fn() -> C>,
}

impl<C> CallBuilder for ReadCall<C> {
    fn request(&self) -> &CallRequest {
        &self.request
    }

    fn request_mut(&mut self) -> &mut CallRequest {
        &mut self.request
    }
}

impl<C: DecodeCallResult> ReadCall<C> {
    /// Build a call to `to` with ABI-encoded `data` (produced by the
    /// function codec of the generated binding).
    pub fn new(provider: Arc<dyn Provider>, to: Address, data: Bytes) -> Self {
        let request = CallRequest {
            to: Some(to),
            data: Some(data),
            chain_id: Some(provider.chain_id()),
            ..Default::default()
        };
        Self { provider, request, _output: PhantomData }
    }

    pub fn provider(&self) -> &Arc<dyn Provider> {
        &self.provider
    }

    /// Simulate this call via `eth_call` at `block` and decode the result.
    ///
    /// Read-only: chain state is never mutated. Overrides, if given, patch
    /// account state or block context for this simulation only. Failures
    /// are classified into the contract-error taxonomy.
    pub async fn call(
        &self,
        block: impl Into<BlockId>,
        state_override: Option<&StateOverride>,
        block_override: Option<&BlockOverride>,
    ) -> Result<C, ContractError> {
        let block = block.into();
        let raw = self
            .provider
            .call(&self.request, block, state_override, block_override)
            .await
            .map_err(classify_call_failure)?;
        debug!(%block, returned = raw.len(), "eth_call simulation succeeded");
        C::decode_call_result(&raw)
            .map_err(|e| ContractError::Rpc(RpcError::Other(format!("result decode: {e}"))))
    }

    /// Run this call through `debug_traceCall` at `block` with the given
    /// tracer. The result type is the tracer's output type.
    pub async fn trace_call<T: TracerConfig>(
        &self,
        block: impl Into<BlockId>,
        tracer: &T,
    ) -> Result<T::Output, RpcError> {
        let raw = self
            .provider
            .trace_call(&self.request, block.into(), tracer.to_rpc_params())
            .await?;
        tracer.parse_output(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_identity_decode() {
        let data = [0x01u8, 0x02, 0x03];
        let decoded = Bytes::decode_call_result(&data).unwrap();
        assert_eq!(decoded.as_ref(), &data);
    }

    #[test]
    fn unit_decode_ignores_data() {
        <()>::decode_call_result(&[0xff; 32]).unwrap();
    }
}
