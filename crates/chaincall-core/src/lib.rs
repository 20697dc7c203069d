//! # chaincall-core
//!
//! Wire/domain types and collaborator seams shared across all ChainCall
//! crates: logs, block selectors, call requests, transaction shapes, the
//! provider and signer traits, and the log-subscription handle.

pub mod block;
pub mod error;
pub mod log;
pub mod overrides;
pub mod provider;
pub mod request;
pub mod signer;
pub mod subscription;
pub mod tracer;
pub mod transaction;

pub use block::{BlockId, BlockTag};
pub use error::{ErrorPayload, RpcError};
pub use log::Log;
pub use overrides::{AccountOverride, BlockOverride, StateOverride};
pub use provider::{AccessListResult, Provider};
pub use request::{AccessListItem, CallRequest};
pub use signer::Signer;
pub use subscription::{LogFilter, LogSubscription};
pub use tracer::{CallFrame, CallLogFrame, CallTracer, TracerConfig};
pub use transaction::{GasFees, PendingTransaction, SignedTransaction, UnsignedTransaction};
