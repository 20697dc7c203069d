//! End-to-end read/write path tests against a scripted mock provider.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use alloy_primitives::{Address, Bytes, B256, U256};
use serde_json::Value;
use tokio::sync::mpsc;

use chaincall_contract::{CallBuilder, ReadWriteCall, SendHandler};
use chaincall_core::{
    AccessListResult, BlockId, BlockOverride, BlockTag, CallRequest, CallTracer, ErrorPayload,
    GasFees, Log, LogFilter, LogSubscription, PendingTransaction, Provider, RpcError,
    SignedTransaction, Signer, StateOverride, UnsignedTransaction,
};
use chaincall_errors::ContractError;

// ─── Mocks ────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct MockProvider {
    /// Operation names in invocation order.
    ops: Mutex<Vec<&'static str>>,
    /// Scripted `eth_call` outcome, taken on first use.
    call_response: Mutex<Option<Result<Bytes, RpcError>>>,
    /// Scripted `debug_traceCall` output.
    trace_response: Mutex<Option<Value>>,
    /// The `from` address observed by `fill_transaction`.
    filled_from: Mutex<Option<Address>>,
}

impl MockProvider {
    fn ops(&self) -> Vec<&'static str> {
        self.ops.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str) {
        self.ops.lock().unwrap().push(op);
    }

    fn with_call_response(self, response: Result<Bytes, RpcError>) -> Self {
        *self.call_response.lock().unwrap() = Some(response);
        self
    }

    fn with_trace_response(self, response: Value) -> Self {
        *self.trace_response.lock().unwrap() = Some(response);
        self
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn chain_id(&self) -> u64 {
        1
    }

    async fn call(
        &self,
        _request: &CallRequest,
        _block: BlockId,
        _state_override: Option<&StateOverride>,
        _block_override: Option<&BlockOverride>,
    ) -> Result<Bytes, RpcError> {
        self.record("call");
        self.call_response
            .lock()
            .unwrap()
            .take()
            .expect("call not scripted")
    }

    async fn fill_transaction(
        &self,
        request: &CallRequest,
    ) -> Result<UnsignedTransaction, RpcError> {
        self.record("fill_transaction");
        *self.filled_from.lock().unwrap() = request.from;
        Ok(UnsignedTransaction {
            chain_id: request.chain_id.expect("chain id must be pinned"),
            nonce: 11,
            gas: 60_000,
            fees: GasFees::DynamicFee { fee_cap: 40_000_000_000, tip_cap: 2_000_000_000 },
            to: request.to,
            value: request.value.unwrap_or(U256::ZERO),
            data: request.data.clone().unwrap_or_default(),
            access_list: request.access_list.clone(),
        })
    }

    async fn send_raw_transaction(
        &self,
        tx: &SignedTransaction,
    ) -> Result<PendingTransaction, RpcError> {
        self.record("send_raw_transaction");
        Ok(PendingTransaction::new(tx.hash))
    }

    async fn create_access_list(
        &self,
        _request: &CallRequest,
        _block: BlockId,
    ) -> Result<AccessListResult, RpcError> {
        self.record("create_access_list");
        Ok(AccessListResult { access_list: Vec::new(), gas_used: 30_000, error: None })
    }

    async fn trace_call(
        &self,
        _request: &CallRequest,
        _block: BlockId,
        _tracer_params: Value,
    ) -> Result<Value, RpcError> {
        self.record("trace_call");
        Ok(self
            .trace_response
            .lock()
            .unwrap()
            .take()
            .expect("trace not scripted"))
    }

    async fn subscribe_logs(&self, _filter: &LogFilter) -> Result<LogSubscription, RpcError> {
        self.record("subscribe_logs");
        let (tx, rx) = mpsc::unbounded_channel::<Log>();
        Ok(LogSubscription::new(rx, Box::new(move || drop(tx))))
    }
}

struct MockSigner {
    address: Address,
    signatures: AtomicUsize,
}

impl MockSigner {
    fn new() -> Self {
        Self { address: Address::repeat_byte(0x5a), signatures: AtomicUsize::new(0) }
    }

    fn signature_count(&self) -> usize {
        self.signatures.load(Ordering::SeqCst)
    }
}

impl Signer for MockSigner {
    fn address(&self) -> Address {
        self.address
    }

    fn sign_transaction(&self, tx: &UnsignedTransaction) -> SignedTransaction {
        self.signatures.fetch_add(1, Ordering::SeqCst);
        SignedTransaction {
            payload: tx.clone(),
            from: self.address,
            raw: Bytes::from(vec![0x02, 0xf8, 0x6f]),
            hash: B256::repeat_byte(0xd1),
        }
    }
}

fn write_call(provider: Arc<MockProvider>) -> ReadWriteCall<Bytes> {
    ReadWriteCall::new(
        provider,
        Address::repeat_byte(0x22),
        Bytes::from(vec![0xa9, 0x05, 0x9c, 0xbb]),
    )
}

// ─── Read path ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn call_decodes_success() {
    let provider = Arc::new(
        MockProvider::default().with_call_response(Ok(Bytes::from(vec![0x01; 32]))),
    );
    let call = write_call(provider.clone());

    let out = call.call(BlockTag::Latest, None, None).await.unwrap();
    assert_eq!(out.len(), 32);
    assert_eq!(provider.ops(), vec!["call"]);
}

#[tokio::test]
async fn call_classifies_revert_reason() {
    let provider = Arc::new(MockProvider::default().with_call_response(Err(
        RpcError::ErrorResponse(ErrorPayload {
            code: 3,
            message: "execution reverted: paused".into(),
            data: Some(Value::String("Pausable: paused".into())),
        }),
    )));
    let call = write_call(provider);

    let err = call.call(19_000_000u64, None, None).await.unwrap_err();
    assert!(matches!(err, ContractError::Revert(reason) if reason == "Pausable: paused"));
}

#[tokio::test]
async fn call_classifies_bare_revert() {
    let provider = Arc::new(MockProvider::default().with_call_response(Err(
        RpcError::ErrorResponse(ErrorPayload {
            code: 3,
            message: "execution reverted".into(),
            data: None,
        }),
    )));
    let call = write_call(provider);

    let err = call.call(BlockTag::Latest, None, None).await.unwrap_err();
    assert!(matches!(err, ContractError::ExecutionReverted));
}

#[tokio::test]
async fn trace_call_parses_tracer_output() {
    let provider = Arc::new(MockProvider::default().with_trace_response(serde_json::json!({
        "type": "CALL",
        "from": "0xd8da6bf26964af9d7eed9e03e53415d37aa96045",
        "to": "0x2222222222222222222222222222222222222222",
        "gas": "0x186a0",
        "gasUsed": "0x5208",
        "input": "0xa9059cbb",
    })));
    let call = write_call(provider);

    let frame = call
        .trace_call(BlockTag::Latest, &CallTracer::default())
        .await
        .unwrap();
    assert_eq!(frame.call_type, "CALL");
    assert_eq!(frame.gas_used, U256::from(0x5208u64));
}

// ─── Write path ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn try_sign_requires_all_fields() {
    let provider = Arc::new(MockProvider::default());
    let signer = MockSigner::new();

    // nonce unset → not ready, nothing signed
    let call = write_call(provider.clone()).gas(60_000).gas_price(30_000_000_000);
    assert!(call.try_sign(&signer).is_none());
    assert_eq!(signer.signature_count(), 0);

    // fully parameterized → signs
    let call = call.nonce(7);
    assert!(call.try_sign(&signer).is_some());
    assert_eq!(signer.signature_count(), 1);
}

#[tokio::test]
async fn send_fast_path_submits_directly() {
    let provider = Arc::new(MockProvider::default());
    let signer = MockSigner::new();
    let call = write_call(provider.clone())
        .nonce(7)
        .gas(60_000)
        .gas_fee_cap(40_000_000_000)
        .gas_tip_cap(2_000_000_000);

    let pending = call.send(&signer).await.unwrap();
    assert_eq!(pending.hash, B256::repeat_byte(0xd1));
    // no fill round trip on the fast path
    assert_eq!(provider.ops(), vec!["send_raw_transaction"]);
    assert_eq!(signer.signature_count(), 1);
}

#[tokio::test]
async fn send_slow_path_fills_signs_submits_once() {
    let provider = Arc::new(MockProvider::default());
    let signer = MockSigner::new();
    // nonce missing → not ready → slow path
    let call = write_call(provider.clone()).gas(60_000);

    let pending = call.send(&signer).await.unwrap();
    assert_eq!(pending.hash, B256::repeat_byte(0xd1));
    assert_eq!(provider.ops(), vec!["fill_transaction", "send_raw_transaction"]);
    assert_eq!(signer.signature_count(), 1);

    // the fill request carried the signer's address...
    assert_eq!(*provider.filled_from.lock().unwrap(), Some(signer.address()));
    // ...but the builder itself was never mutated (snapshot semantics)
    assert_eq!(call.request().from, None);
    assert_eq!(call.request().nonce, None);
}

#[tokio::test]
async fn send_result_wrapping_is_pluggable() {
    struct Tagged {
        hash: B256,
        chain: u64,
    }

    struct TaggingHandler;

    impl SendHandler for TaggingHandler {
        type Pending = Tagged;

        fn on_sent(&self, pending: PendingTransaction) -> Tagged {
            Tagged { hash: pending.hash, chain: 1 }
        }
    }

    let provider = Arc::new(MockProvider::default());
    let signer = MockSigner::new();
    let call = write_call(provider)
        .nonce(7)
        .gas(60_000)
        .gas_price(30_000_000_000)
        .with_handler(TaggingHandler);

    let tagged = call.send(&signer).await.unwrap();
    assert_eq!(tagged.hash, B256::repeat_byte(0xd1));
    assert_eq!(tagged.chain, 1);
}

#[tokio::test]
async fn create_access_list_for_this_call() {
    let provider = Arc::new(MockProvider::default());
    let call = write_call(provider.clone());

    let result = call.create_access_list(BlockTag::Latest).await.unwrap();
    assert_eq!(result.gas_used, 30_000);
    assert_eq!(provider.ops(), vec!["create_access_list"]);
}

// ─── Builder invariants ───────────────────────────────────────────────────────

#[tokio::test]
async fn chain_id_pinned_at_construction() {
    let provider = Arc::new(MockProvider::default());
    let call = write_call(provider);
    assert_eq!(call.request().chain_id, Some(1));
}

#[tokio::test]
async fn snapshot_is_defensive() {
    let provider = Arc::new(MockProvider::default());
    let call = write_call(provider).nonce(7);

    let mut snapshot = call.to_call_request();
    snapshot.nonce = Some(99);
    snapshot.gas = Some(1);

    assert_eq!(call.request().nonce, Some(7));
    assert_eq!(call.request().gas, None);
}

#[tokio::test]
async fn subscription_unsubscribe_interrupts_pull() {
    let provider = Arc::new(MockProvider::default());
    let mut sub = provider.subscribe_logs(&LogFilter::new()).await.unwrap();

    sub.unsubscribe();
    sub.unsubscribe(); // second call is a no-op
    assert!(sub.is_unsubscribed());
    assert!(sub.next().await.is_none());
}
