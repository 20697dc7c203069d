//! The `Signer` trait — the key-management collaborator seam.

use alloy_primitives::Address;

use crate::transaction::{SignedTransaction, UnsignedTransaction};

/// Signs fully parameterized transactions.
///
/// Key management lives outside this layer; implementations hold in-memory
/// key material (or proxy to hardware/remote signers) and must be
/// `Send + Sync` for use across Tokio tasks. Signing itself is infallible —
/// readiness of the transaction is checked before a signer is ever invoked
/// (see `try_sign` on the write path).
pub trait Signer: Send + Sync {
    /// The address this signer signs for.
    fn address(&self) -> Address;

    /// Sign the transaction, producing its raw wire encoding and hash.
    fn sign_transaction(&self, tx: &UnsignedTransaction) -> SignedTransaction;
}
