//! # Domain Services
//!
//! One-shot builder functions for callers that do not keep a tree around.

use shared_types::{Address, Hash};

use super::entities::{LeafSet, MerkleTree};
use super::errors::CommitmentError;

/// Compute the Merkle root of `leaf_set`.
///
/// Fails with `EmptyLeafSet` if there is nothing to commit.
pub fn build_root(leaf_set: &LeafSet) -> Result<Hash, CommitmentError> {
    MerkleTree::build(leaf_set).map(|tree| tree.root())
}

/// Build the sibling path for `key` in `leaf_set`.
///
/// Fails with `KeyNotFound` if `key` is not a member.
pub fn build_proof(leaf_set: &LeafSet, key: &Address) -> Result<Vec<Hash>, CommitmentError> {
    if !leaf_set.contains(key) {
        return Err(CommitmentError::KeyNotFound { address: *key });
    }
    let tree = MerkleTree::build(leaf_set)?;
    tree.generate_proof(leaf_set, key).map(|proof| proof.siblings)
}
