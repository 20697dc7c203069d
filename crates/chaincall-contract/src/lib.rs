//! # chaincall-contract
//!
//! Contract call construction and execution: the fluent parameter builder,
//! the read path (`eth_call` simulation and `debug_traceCall`), and the
//! write path (sign-or-fill, submit, pluggable pending-handle wrapping).
//!
//! A [`ReadCall`] corresponds to Solidity `view`/`pure` functions; a
//! [`ReadWriteCall`] additionally signs and submits. Chained configuration
//! calls keep the concrete builder type, so configuring a read-write call
//! never degrades it to a read-only one.

pub mod builder;
pub mod read;
pub mod write;

pub use builder::CallBuilder;
pub use read::{DecodeCallResult, ReadCall};
pub use write::{DefaultSendHandler, ReadWriteCall, SendHandler};
