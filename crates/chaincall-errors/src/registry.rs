//! The custom-error directory — maps 4-byte selectors to declared error
//! signatures.
//!
//! Generated bindings register their errors here at startup; classification
//! consults the directory when a revert payload looks like an encoded
//! custom error. The directory is open for extension: registering new
//! signatures never touches the classification algorithm.

use alloy_core::dyn_abi::{DynSolType, DynSolValue};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};
use tiny_keccak::{Hasher, Keccak};

use crate::types::DecodedCustomError;

/// A single parameter of a declared custom error.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorParam {
    /// Parameter name (may be empty for unnamed params).
    pub name: String,
    pub ty: DynSolType,
}

/// A declared custom error signature.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSignature {
    /// Error name, e.g. `"InsufficientBalance"`.
    pub name: String,
    /// Canonical signature, e.g. `"InsufficientBalance(address,uint256)"`.
    pub signature: String,
    /// First 4 bytes of keccak256 of the canonical signature.
    pub selector: [u8; 4],
    /// Declared parameters in order.
    pub params: Vec<ErrorParam>,
}

impl ErrorSignature {
    /// Build a signature from its name and declared parameters, deriving
    /// the canonical string and selector.
    pub fn new(name: impl Into<String>, params: Vec<ErrorParam>) -> Self {
        let name = name.into();
        let types: Vec<String> = params
            .iter()
            .map(|p| p.ty.sol_type_name().into_owned())
            .collect();
        let signature = format!("{}({})", name, types.join(","));
        let selector = selector_of(&signature);
        Self { name, signature, selector, params }
    }

    /// Decode the argument payload (revert data *after* the selector).
    pub fn decode_payload(&self, payload: &[u8]) -> Option<DecodedCustomError> {
        if self.params.is_empty() {
            return Some(DecodedCustomError { name: self.name.clone(), fields: Vec::new() });
        }
        let types: Vec<DynSolType> = self.params.iter().map(|p| p.ty.clone()).collect();
        let decoded = DynSolType::Tuple(types).abi_decode_sequence(payload).ok()?;
        let values = match decoded {
            DynSolValue::Tuple(values) => values,
            single => vec![single],
        };
        let fields = self
            .params
            .iter()
            .zip(values)
            .map(|(param, value)| (param.name.clone(), value))
            .collect();
        Some(DecodedCustomError { name: self.name.clone(), fields })
    }
}

/// First 4 bytes of keccak256 of a canonical signature string.
pub fn selector_of(signature: &str) -> [u8; 4] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(signature.as_bytes());
    hasher.finalize(&mut output);
    [output[0], output[1], output[2], output[3]]
}

/// Looks up custom errors by their leading 4-byte selector.
pub trait ErrorRegistry: Send + Sync {
    /// All signatures registered for `selector`. Multiple entries mean a
    /// selector collision; candidates are tried in registration order.
    fn get_by_selector(&self, selector: [u8; 4]) -> Vec<ErrorSignature>;

    /// Decode full revert data (selector included) into a custom error,
    /// trying colliding candidates in order. `None` if the selector is
    /// unknown or no candidate's ABI fits the payload.
    fn decode(&self, data: &[u8]) -> Option<DecodedCustomError> {
        if data.len() < 4 {
            return None;
        }
        let selector: [u8; 4] = data[..4].try_into().ok()?;
        let payload = &data[4..];
        for sig in self.get_by_selector(selector) {
            if let Some(decoded) = sig.decode_payload(payload) {
                return Some(decoded);
            }
        }
        None
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A simple in-memory registry backed by `HashMap`.
#[derive(Default)]
pub struct MemoryErrorRegistry {
    /// selector → signatures in registration order (collisions kept).
    by_selector: RwLock<HashMap<[u8; 4], Vec<ErrorSignature>>>,
}

impl MemoryErrorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a signature. Safe to call from multiple threads; typically
    /// done once at startup by generated bindings.
    pub fn register(&self, sig: ErrorSignature) {
        let mut map = self.by_selector.write().unwrap();
        map.entry(sig.selector).or_default().push(sig);
    }
}

impl ErrorRegistry for MemoryErrorRegistry {
    fn get_by_selector(&self, selector: [u8; 4]) -> Vec<ErrorSignature> {
        self.by_selector
            .read()
            .unwrap()
            .get(&selector)
            .cloned()
            .unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.by_selector.read().unwrap().values().map(|v| v.len()).sum()
    }
}

/// The process-wide default registry consulted by classification when no
/// explicit registry is supplied. Bindings register into it at startup.
pub fn global_registry() -> &'static MemoryErrorRegistry {
    static REGISTRY: OnceLock<MemoryErrorRegistry> = OnceLock::new();
    REGISTRY.get_or_init(MemoryErrorRegistry::new)
}
