//! # chaincall-abi
//!
//! The event signature model and the log matching/decoding engine.
//!
//! An [`EventSignature`] describes one declared event: its parameter types,
//! which of them are indexed, and whether the event is anonymous. Typed
//! event bindings implement [`EventFactory`] on top of a signature; the
//! factory validates a raw [`Log`](chaincall_core::Log) structurally and, on
//! match, decodes and reassembles the arguments in declaration order.
//! Byte-level value decoding is delegated to alloy's `dyn-abi` codec.

pub mod error;
pub mod event;
pub mod factory;

pub use error::AbiError;
pub use event::{EventSignature, EventToken};
pub use factory::{decode_as, log_matches, ContractEvent, EventDispatcher, EventFactory};
