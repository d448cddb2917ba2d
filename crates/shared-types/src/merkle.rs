//! # Merkle Wire Contract
//!
//! The hashing rules that the commitment builder and every verifier must
//! share bit-for-bit. A mismatch here does not crash anything, it makes the
//! verifier silently accept or reject the wrong callers.
//!
//! | Rule | Definition |
//! |------|------------|
//! | Hash function | Keccak-256 |
//! | Leaf | `keccak256(address[0..20])`, the 20 raw address bytes |
//! | Internal node | `keccak256(min(a, b) ‖ max(a, b))`, big-endian comparison |
//! | Proof | sibling hashes from leaf to root, no position flags |

use sha3::{Digest, Keccak256};

use crate::entities::{Address, Hash};

/// Keccak-256 of arbitrary bytes.
#[must_use]
pub fn keccak256(data: &[u8]) -> Hash {
    Hash(Keccak256::digest(data).into())
}

/// Leaf hash for one allowlisted address.
#[must_use]
pub fn leaf_hash(address: &Address) -> Hash {
    keccak256(address.as_bytes())
}

/// Parent of two nodes under the sorted-pair rule.
///
/// Commutative: `hash_sorted_pair(a, b) == hash_sorted_pair(b, a)`.
#[must_use]
pub fn hash_sorted_pair(a: &Hash, b: &Hash) -> Hash {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Keccak256::new();
    hasher.update(lo.as_bytes());
    hasher.update(hi.as_bytes());
    Hash(hasher.finalize().into())
}

/// Fold a proof onto a leaf, returning the implied root.
#[must_use]
pub fn process_proof(leaf: Hash, proof: &[Hash]) -> Hash {
    proof
        .iter()
        .fold(leaf, |current, sibling| hash_sorted_pair(&current, sibling))
}

/// Stateless membership check: does `proof` connect `key` to `root`?
#[must_use]
pub fn verify(root: &Hash, key: &Address, proof: &[Hash]) -> bool {
    process_proof(leaf_hash(key), proof) == *root
}
