//! The `Provider` trait — the JSON-RPC collaborator seam.

use alloy_primitives::Bytes;
use async_trait::async_trait;
use serde_json::Value;

use crate::block::BlockId;
use crate::error::RpcError;
use crate::overrides::{BlockOverride, StateOverride};
use crate::request::{AccessListItem, CallRequest};
use crate::subscription::{LogFilter, LogSubscription};
use crate::transaction::{PendingTransaction, SignedTransaction, UnsignedTransaction};

/// Result of `eth_createAccessList`.
#[derive(Debug, Clone, Default)]
pub struct AccessListResult {
    pub access_list: Vec<AccessListItem>,
    pub gas_used: u64,
    /// Set when the call itself reverted while the access list was built.
    pub error: Option<String>,
}

/// The central async trait every RPC provider must implement.
///
/// All operations are lazy futures: nothing is dispatched until awaited, and
/// abandoning an unawaited future is the only client-side cancellation —
/// once a request reached the network it cannot be retracted.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` for use across Tokio tasks.
///
/// # Object Safety
/// The trait is object-safe and is typically stored as `Arc<dyn Provider>`.
#[async_trait]
pub trait Provider: Send + Sync + 'static {
    /// The chain id this provider is connected to, fetched once at
    /// connection time and pinned for the provider's lifetime.
    fn chain_id(&self) -> u64;

    /// Simulate `request` at `block` via `eth_call`, without mutating chain
    /// state. Overrides, if given, patch state/block context for this
    /// simulation only.
    async fn call(
        &self,
        request: &CallRequest,
        block: BlockId,
        state_override: Option<&StateOverride>,
        block_override: Option<&BlockOverride>,
    ) -> Result<Bytes, RpcError>;

    /// Fill the missing fields of `request` (gas estimate, nonce, fee
    /// suggestions) in a single round trip, returning a transaction ready
    /// to sign.
    async fn fill_transaction(
        &self,
        request: &CallRequest,
    ) -> Result<UnsignedTransaction, RpcError>;

    /// Submit a signed transaction via `eth_sendRawTransaction`.
    async fn send_raw_transaction(
        &self,
        tx: &SignedTransaction,
    ) -> Result<PendingTransaction, RpcError>;

    /// Build an access list for `request` at `block` via
    /// `eth_createAccessList`.
    async fn create_access_list(
        &self,
        request: &CallRequest,
        block: BlockId,
    ) -> Result<AccessListResult, RpcError>;

    /// Run `request` through `debug_traceCall` at `block` with the given
    /// tracer parameters, returning the raw tracer output.
    async fn trace_call(
        &self,
        request: &CallRequest,
        block: BlockId,
        tracer_params: Value,
    ) -> Result<Value, RpcError>;

    /// Open a long-lived log subscription matching `filter`.
    async fn subscribe_logs(&self, filter: &LogFilter) -> Result<LogSubscription, RpcError>;
}
