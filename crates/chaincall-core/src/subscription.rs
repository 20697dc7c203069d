//! Long-lived log subscriptions.

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tokio::sync::mpsc;
use tracing::debug;

use crate::block::BlockId;
use crate::log::Log;

/// Filter criteria for a log subscription or query.
///
/// Each topic position is either pinned to a value or left as a wildcard
/// (`None`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFilter {
    /// Emitting addresses to match; empty matches any address.
    pub address: Vec<Address>,
    /// Positional topic constraints.
    pub topics: Vec<Option<B256>>,
    #[serde(skip)]
    pub from_block: Option<BlockId>,
    #[serde(skip)]
    pub to_block: Option<BlockId>,
}

impl LogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to logs emitted by `address`.
    pub fn address(mut self, address: Address) -> Self {
        self.address.push(address);
        self
    }

    /// Pin `topics[0]` to an event signature hash.
    pub fn topic0(mut self, topic: B256) -> Self {
        if self.topics.is_empty() {
            self.topics.push(Some(topic));
        } else {
            self.topics[0] = Some(topic);
        }
        self
    }

    pub fn from_block(mut self, block: impl Into<BlockId>) -> Self {
        self.from_block = Some(block.into());
        self
    }

    pub fn to_block(mut self, block: impl Into<BlockId>) -> Self {
        self.to_block = Some(block.into());
        self
    }
}

/// A handle to one active log subscription.
///
/// Pulling is blocking-style: `next` suspends until the next log arrives or
/// the subscription ends. The only cancellation signal is [`unsubscribe`]
/// (`LogSubscription::unsubscribe`) — it is safe to call exactly once
/// (subsequent calls are no-ops), and it closes the underlying channel,
/// which interrupts any blocked pull.
pub struct LogSubscription {
    receiver: mpsc::UnboundedReceiver<Log>,
    /// Consumed on first `unsubscribe`; tells the provider to send
    /// `eth_unsubscribe` and drop its sender half.
    cancel: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl LogSubscription {
    /// Build a subscription from a log channel and a cancel hook.
    ///
    /// The hook must drop the provider-side sender so that a blocked `next`
    /// observes the channel closing.
    pub fn new(
        receiver: mpsc::UnboundedReceiver<Log>,
        cancel: Box<dyn FnOnce() + Send>,
    ) -> Self {
        Self {
            receiver,
            cancel: Mutex::new(Some(cancel)),
        }
    }

    /// Pull the next log, suspending until one arrives. Returns `None` once
    /// the subscription has been unsubscribed (or the provider closed it)
    /// and the buffer is drained.
    pub async fn next(&mut self) -> Option<Log> {
        self.receiver.recv().await
    }

    /// Pull the next log, blocking the current thread. For use outside an
    /// async context only.
    pub fn blocking_next(&mut self) -> Option<Log> {
        self.receiver.blocking_recv()
    }

    /// End the subscription. Idempotent: the first call runs the provider's
    /// cancel hook and closes the channel; later calls do nothing.
    pub fn unsubscribe(&self) {
        let hook = self.cancel.lock().unwrap().take();
        if let Some(hook) = hook {
            debug!("closing log subscription");
            hook();
        }
    }

    /// `true` if `unsubscribe` has already run.
    pub fn is_unsubscribed(&self) -> bool {
        self.cancel.lock().unwrap().is_none()
    }
}

impl Drop for LogSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
