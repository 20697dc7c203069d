//! The write execution path: sign-or-fill, submit, and the pending-handle
//! wrapping seam.

use alloy_primitives::{Address, Bytes};
use futures::TryFutureExt;
use std::sync::Arc;
use tracing::debug;

use chaincall_core::{
    AccessListResult, BlockId, BlockOverride, CallRequest, PendingTransaction, Provider,
    RpcError, SignedTransaction, Signer, StateOverride, TracerConfig,
};
use chaincall_errors::ContractError;

use crate::builder::CallBuilder;
use crate::read::{DecodeCallResult, ReadCall};

/// Wraps the raw pending transaction returned at submission into a
/// context-specific handle.
///
/// Different call contexts (deployments, plain function calls) attach
/// different await/inclusion semantics to a submitted transaction; this
/// seam lets them do so without this layer performing any waiting or
/// retrying itself.
pub trait SendHandler: Send + Sync {
    type Pending;

    fn on_sent(&self, pending: PendingTransaction) -> Self::Pending;
}

/// The identity handler: callers get the raw [`PendingTransaction`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSendHandler;

impl SendHandler for DefaultSendHandler {
    type Pending = PendingTransaction;

    fn on_sent(&self, pending: PendingTransaction) -> Self::Pending {
        pending
    }
}

/// A contract call that can both read and write chain state.
///
/// Wraps a [`ReadCall`] — simulation and tracing stay available — and adds
/// signing, submission, and access-list creation.
pub struct ReadWriteCall<C, H: SendHandler = DefaultSendHandler> {
    inner: ReadCall<C>,
    handler: H,
}

impl<C, H: SendHandler> CallBuilder for ReadWriteCall<C, H> {
    fn request(&self) -> &CallRequest {
        self.inner.request()
    }

    fn request_mut(&mut self) -> &mut CallRequest {
        self.inner.request_mut()
    }
}

impl<C: DecodeCallResult> ReadWriteCall<C, DefaultSendHandler> {
    /// Build a read-write call to `to` with ABI-encoded `data`.
    pub fn new(provider: Arc<dyn Provider>, to: Address, data: Bytes) -> Self {
        Self { inner: ReadCall::new(provider, to, data), handler: DefaultSendHandler }
    }
}

impl<C: DecodeCallResult, H: SendHandler> ReadWriteCall<C, H> {
    /// Replace the send handler, changing what [`send`](Self::send) yields.
    pub fn with_handler<H2: SendHandler>(self, handler: H2) -> ReadWriteCall<C, H2> {
        ReadWriteCall { inner: self.inner, handler }
    }

    pub fn provider(&self) -> &Arc<dyn Provider> {
        self.inner.provider()
    }

    /// Simulate this call via `eth_call`. See [`ReadCall::call`].
    pub async fn call(
        &self,
        block: impl Into<BlockId>,
        state_override: Option<&StateOverride>,
        block_override: Option<&BlockOverride>,
    ) -> Result<C, ContractError> {
        self.inner.call(block, state_override, block_override).await
    }

    /// Trace this call via `debug_traceCall`. See [`ReadCall::trace_call`].
    pub async fn trace_call<T: TracerConfig>(
        &self,
        block: impl Into<BlockId>,
        tracer: &T,
    ) -> Result<T::Output, RpcError> {
        self.inner.trace_call(block, tracer).await
    }

    /// Build an access list for this call at `block`.
    pub async fn create_access_list(
        &self,
        block: impl Into<BlockId>,
    ) -> Result<AccessListResult, RpcError> {
        self.provider()
            .create_access_list(self.request(), block.into())
            .await
    }

    /// Try to sign this call locally. Succeeds only if `nonce`, `gas`, and
    /// either `gas_price` or both fee-cap fields are already set; otherwise
    /// returns `None` — never a partially populated signature.
    pub fn try_sign(&self, signer: &dyn Signer) -> Option<SignedTransaction> {
        let tx = self.request().to_unsigned_transaction()?;
        Some(signer.sign_transaction(&tx))
    }

    /// Sign this call and submit it to the network.
    ///
    /// Fast path: if [`try_sign`](Self::try_sign) succeeds, the signed
    /// transaction is submitted directly. Otherwise the call is snapshotted,
    /// `from` is set to the signer's address, the provider fills the missing
    /// fields in one request, and the filled transaction is signed and
    /// submitted — one sequential chain, executed once. Submission failures
    /// are not retried here.
    pub async fn send(&self, signer: &dyn Signer) -> Result<H::Pending, RpcError> {
        if let Some(signed) = self.try_sign(signer) {
            debug!(hash = %signed.hash, "submitting locally signed transaction");
            return self
                .provider()
                .send_raw_transaction(&signed)
                .map_ok(|pending| self.handler.on_sent(pending))
                .await;
        }

        // Work on a snapshot so filling never mutates this builder.
        let mut request = self.to_call_request();
        request.from = Some(signer.address());
        let filled = self.provider().fill_transaction(&request).await?;
        let signed = signer.sign_transaction(&filled);
        debug!(hash = %signed.hash, nonce = filled.nonce, "submitting filled transaction");
        let pending = self.provider().send_raw_transaction(&signed).await?;
        Ok(self.handler.on_sent(pending))
    }
}
