//! The event signature model.
//!
//! An `EventSignature` is the immutable description of one declared event:
//! ordered `(type, indexed)` tokens plus the anonymity flag. Construction
//! derives the indexed/non-indexed type lists, the canonical signature
//! string, and the keccak-256 topic id compared against `topics[0]`.

use alloy_core::dyn_abi::{DynSolType, DynSolValue};
use alloy_primitives::B256;
use tiny_keccak::{Hasher, Keccak};

use chaincall_core::{Log, LogFilter};

use crate::error::AbiError;

/// One declared event parameter: its Solidity type and indexed flag.
#[derive(Debug, Clone, PartialEq)]
pub struct EventToken {
    pub ty: DynSolType,
    pub indexed: bool,
}

impl EventToken {
    pub fn new(ty: DynSolType, indexed: bool) -> Self {
        Self { ty, indexed }
    }
}

/// Immutable description of one event signature.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSignature {
    name: String,
    tokens: Vec<EventToken>,
    anonymous: bool,
    /// Indexed parameter types, declaration order preserved.
    indexed: Vec<DynSolType>,
    /// Non-indexed parameter types, declaration order preserved.
    data: Vec<DynSolType>,
    /// Canonical signature string, e.g. `"Transfer(address,address,uint256)"`.
    signature: String,
    /// keccak256 of the canonical signature — `topics[0]` for non-anonymous
    /// events.
    topic_id: B256,
}

impl EventSignature {
    /// Build a signature from its declared tokens.
    ///
    /// The canonical signature (and thus the topic id) is always computed
    /// from the *declared* types: the hash substitution for non-value
    /// indexed parameters applies to topic encoding only, never to the
    /// signature itself.
    pub fn new(name: impl Into<String>, tokens: Vec<EventToken>, anonymous: bool) -> Self {
        let name = name.into();
        let mut indexed = Vec::new();
        let mut data = Vec::new();
        for token in &tokens {
            if token.indexed {
                indexed.push(token.ty.clone());
            } else {
                data.push(token.ty.clone());
            }
        }

        let params: Vec<String> = tokens
            .iter()
            .map(|t| t.ty.sol_type_name().into_owned())
            .collect();
        let signature = format!("{}({})", name, params.join(","));
        let topic_id = keccak256(signature.as_bytes());

        Self { name, tokens, anonymous, indexed, data, signature, topic_id }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self) -> &[EventToken] {
        &self.tokens
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    pub fn indexed_types(&self) -> &[DynSolType] {
        &self.indexed
    }

    pub fn data_types(&self) -> &[DynSolType] {
        &self.data
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn topic_id(&self) -> B256 {
        self.topic_id
    }

    /// A subscription/query filter for this event.
    ///
    /// Non-anonymous signatures pin `topics[0]` to the topic id; anonymous
    /// signatures have no selector topic to pin, so the filter starts
    /// unconstrained.
    pub fn log_filter(&self) -> LogFilter {
        if self.anonymous {
            LogFilter::new()
        } else {
            LogFilter::new().topic0(self.topic_id)
        }
    }

    /// Pure structural check: does `log` have the topic/data layout of this
    /// signature? Performs no decoding.
    pub fn matches(&self, log: &Log) -> bool {
        if self.anonymous {
            if self.indexed.len() != log.topics.len() {
                return false;
            }
        } else {
            if self.indexed.len() + 1 != log.topics.len() {
                return false;
            }
            if log.topics[0] != self.topic_id {
                return false;
            }
        }
        self.data.is_empty() == log.data.is_empty()
    }

    /// Decode the indexed parameters from `topics`, declaration order
    /// preserved. `topics` is the full topic list of the log — the selector
    /// slot is skipped for non-anonymous signatures.
    pub fn decode_topics(&self, topics: &[B256]) -> Result<Vec<DynSolValue>, AbiError> {
        let offset = if self.anonymous { 0 } else { 1 };
        let mut values = Vec::with_capacity(self.indexed.len());
        for (i, ty) in self.indexed.iter().enumerate() {
            let topic = topics
                .get(i + offset)
                .ok_or_else(|| AbiError::TopicDecodeFailed {
                    index: i + offset,
                    reason: "missing topic".into(),
                })?;
            let value = topic_type(ty)
                .abi_decode(topic.as_slice())
                .map_err(|e| AbiError::TopicDecodeFailed {
                    index: i + offset,
                    reason: e.to_string(),
                })?;
            values.push(value);
        }
        Ok(values)
    }

    /// Decode the non-indexed parameters from the log's data payload as a
    /// single sequence, declaration order preserved.
    pub fn decode_data(&self, data: &[u8]) -> Result<Vec<DynSolValue>, AbiError> {
        if self.data.is_empty() {
            return Ok(Vec::new());
        }
        let tuple = DynSolType::Tuple(self.data.clone());
        let decoded = tuple
            .abi_decode_sequence(data)
            .map_err(|e| AbiError::DecodeFailed { reason: e.to_string() })?;
        match decoded {
            DynSolValue::Tuple(values) => Ok(values),
            single => Ok(vec![single]),
        }
    }

    /// Validate `log` against this signature and, on match, decode all
    /// parameters into a single list following the original declaration
    /// order.
    ///
    /// Returns `Ok(None)` when the log does not structurally match —
    /// a routine outcome when scanning heterogeneous logs, not an error.
    pub fn decode_log(&self, log: &Log) -> Result<Option<Vec<DynSolValue>>, AbiError> {
        if !self.matches(log) {
            return Ok(None);
        }

        let topics = self.decode_topics(&log.topics)?;
        let data = self.decode_data(&log.data)?;

        // Interleave back into declaration order: each token's indexed flag
        // selects which list supplies the next value.
        let mut topics = topics.into_iter();
        let mut data = data.into_iter();
        let mut merged = Vec::with_capacity(self.tokens.len());
        for token in &self.tokens {
            let value = if token.indexed { topics.next() } else { data.next() };
            match value {
                Some(v) => merged.push(v),
                None => {
                    return Err(AbiError::ArityMismatch {
                        expected: self.tokens.len(),
                        got: merged.len(),
                    })
                }
            }
        }
        Ok(Some(merged))
    }
}

/// The type actually stored in a topic slot for an indexed parameter.
///
/// Dynamically sized types, arrays, and tuples are stored as the keccak-256
/// hash of their encoding — decoding such a parameter yields that 32-byte
/// hash, never the original value.
pub(crate) fn topic_type(ty: &DynSolType) -> DynSolType {
    match ty {
        DynSolType::String
        | DynSolType::Bytes
        | DynSolType::Array(_)
        | DynSolType::FixedArray(_, _)
        | DynSolType::Tuple(_) => DynSolType::FixedBytes(32),
        other => other.clone(),
    }
}

pub(crate) fn keccak256(input: &[u8]) -> B256 {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(input);
    hasher.finalize(&mut output);
    B256::from(output)
}
