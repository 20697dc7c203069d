//! # chaincall-errors
//!
//! The contract-failure taxonomy and the classification of raw RPC errors
//! into it.
//!
//! This crate defines:
//! - [`ContractError`] — the four-tier taxonomy (`ExecutionReverted`,
//!   `Revert`, `Custom`, `Rpc`)
//! - [`ErrorRegistry`] — the selector-keyed custom-error directory
//! - [`classify_call_failure`] — the classification algorithm applied to
//!   every failed simulation

pub mod classify;
pub mod registry;
pub mod types;

pub use classify::{classify_call_failure, classify_with, is_valid_hex};
pub use registry::{global_registry, ErrorParam, ErrorRegistry, ErrorSignature, MemoryErrorRegistry};
pub use types::{ContractError, DecodedCustomError};
