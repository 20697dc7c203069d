//! Typed event factories and multi-candidate dispatch.

use alloy_core::dyn_abi::DynSolValue;
use alloy_primitives::{Address, B256};

use chaincall_core::Log;

use crate::error::AbiError;
use crate::event::EventSignature;

/// A decoded event, exposing the metadata of its originating log.
///
/// Implementations hold the `Log` they were decoded from; the accessors
/// borrow from it rather than copying metadata into the event itself.
pub trait ContractEvent {
    fn log(&self) -> &Log;

    fn address(&self) -> Address {
        self.log().address
    }

    fn block_hash(&self) -> B256 {
        self.log().block_hash
    }

    fn block_number(&self) -> u64 {
        self.log().block_number
    }

    fn transaction_hash(&self) -> B256 {
        self.log().transaction_hash
    }

    fn transaction_index(&self) -> u64 {
        self.log().transaction_index
    }

    fn log_index(&self) -> u64 {
        self.log().log_index
    }

    fn removed(&self) -> bool {
        self.log().removed
    }
}

/// Decodes raw logs into one concrete event type.
///
/// Typed bindings implement [`signature`](EventFactory::signature) and
/// [`new_event`](EventFactory::new_event); validation, decoding, and
/// argument reassembly are provided.
pub trait EventFactory: ContractEvent + Sized {
    /// The declared signature of this event type.
    fn signature() -> &'static EventSignature;

    /// Build the typed event from the decoded arguments, which arrive in
    /// declaration order. The factory takes ownership of the log.
    fn new_event(log: Log, args: Vec<DynSolValue>) -> Result<Self, AbiError>;

    /// Pure structural check — no decoding is performed. Cheap enough to
    /// run against every log of a heterogeneous scan.
    fn is_log_valid(log: &Log) -> bool {
        Self::signature().matches(log)
    }

    /// Decode `log` into this event type.
    ///
    /// Returns `Ok(None)` if the log does not structurally match this
    /// signature — an expected outcome, not an error. Codec-level failures
    /// on a structurally matching log propagate as `Err`.
    fn decode(log: &Log) -> Result<Option<Self>, AbiError> {
        match Self::signature().decode_log(log)? {
            Some(args) => Self::new_event(log.clone(), args).map(Some),
            None => Ok(None),
        }
    }
}

/// `true` if `log` structurally matches the event type `E`.
pub fn log_matches<E: EventFactory>(log: &Log) -> bool {
    E::is_log_valid(log)
}

/// Decode `log` as the event type `E`, `Ok(None)` on non-match.
pub fn decode_as<E: EventFactory>(log: &Log) -> Result<Option<E>, AbiError> {
    E::decode(log)
}

type BoxedDecoder<T> = Box<dyn Fn(&Log) -> Result<Option<T>, AbiError> + Send + Sync>;

/// An ordered collection of event factories sharing a common event type.
///
/// Dispatch is first-match-wins: candidates are tried in registration order
/// and the first successful decode is returned. Structural collisions
/// between registered signatures are not detected — uniqueness is the
/// caller's responsibility.
pub struct EventDispatcher<T> {
    entries: Vec<DispatchEntry<T>>,
}

struct DispatchEntry<T> {
    is_valid: fn(&Log) -> bool,
    decode: BoxedDecoder<T>,
}

impl<T> EventDispatcher<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register the event type `E`, converted into the common type via
    /// `From`. Registration order is dispatch order.
    pub fn with<E>(mut self) -> Self
    where
        E: EventFactory + 'static,
        T: From<E> + 'static,
    {
        self.entries.push(DispatchEntry {
            is_valid: E::is_log_valid,
            decode: Box::new(|log: &Log| Ok(E::decode(log)?.map(T::from))),
        });
        self
    }

    /// `true` if `log` structurally matches any registered signature.
    /// Reuses the cheap validity checks; nothing is decoded.
    pub fn matches(&self, log: &Log) -> bool {
        self.entries.iter().any(|e| (e.is_valid)(log))
    }

    /// Decode `log` against the registered factories in order, returning
    /// the first successful decode, or `Ok(None)` if nothing matched.
    pub fn decode(&self, log: &Log) -> Result<Option<T>, AbiError> {
        for entry in &self.entries {
            if let Some(event) = (entry.decode)(log)? {
                return Ok(Some(event));
            }
        }
        Ok(None)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for EventDispatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}
