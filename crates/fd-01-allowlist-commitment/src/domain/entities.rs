//! # Domain Entities
//!
//! LeafSet, MerkleTree and MerkleProof for the allowlist commitment.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use shared_types::{hash_sorted_pair, leaf_hash, verify, Address, Hash};
use std::collections::BTreeSet;

use super::errors::CommitmentError;
use super::value_objects::CommitmentConfig;

/// The canonical set of eligible addresses and their leaf hashes.
///
/// ## INVARIANT-1: Order Independence
///
/// Leaves are stored sorted ascending and de-duplicated, so the same
/// addresses produce the same leaves regardless of input order or
/// repetition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafSet {
    /// Member addresses, used for membership checks.
    members: BTreeSet<Address>,
    /// Leaf hashes, sorted ascending.
    leaves: Vec<Hash>,
}

impl LeafSet {
    /// Build a leaf set with the default configuration.
    pub fn new(addresses: impl IntoIterator<Item = Address>) -> Self {
        Self::with_config(addresses, &CommitmentConfig::default())
    }

    /// Build a leaf set, hashing in parallel when the set is large.
    pub fn with_config(
        addresses: impl IntoIterator<Item = Address>,
        config: &CommitmentConfig,
    ) -> Self {
        let members: BTreeSet<Address> = addresses.into_iter().collect();

        let mut leaves: Vec<Hash> = if config.is_parallel(members.len()) {
            members.par_iter().map(leaf_hash).collect()
        } else {
            members.iter().map(leaf_hash).collect()
        };
        leaves.sort_unstable();
        leaves.dedup();

        Self { members, leaves }
    }

    /// Parse `0x`-prefixed hex addresses into a leaf set.
    pub fn from_hex_strings<I, S>(inputs: I) -> Result<Self, CommitmentError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let addresses = inputs
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                Address::from_hex(s).map_err(|source| CommitmentError::InvalidAddress {
                    input: s.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(addresses))
    }

    /// Number of distinct addresses.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Whether the set has no addresses.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Whether `address` is a member.
    pub fn contains(&self, address: &Address) -> bool {
        self.members.contains(address)
    }

    /// Sorted leaf hashes.
    pub fn leaves(&self) -> &[Hash] {
        &self.leaves
    }

    /// Member addresses in ascending byte order.
    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.members.iter()
    }
}

/// A binary Merkle tree over a [`LeafSet`] using sorted-pair hashing.
///
/// ALGORITHM: each parent is `H(min(l, r) || max(l, r))`. A trailing odd
/// node is paired with itself, so every level halves (rounding up) and every
/// leaf sits at the same depth.
///
/// ## Invariants
///
/// - **INVARIANT-2** (Proof Validity): proofs from `generate_proof` verify.
/// - **INVARIANT-3** (Fixed Proof Length): `depth() == ceil(log2(leaf_count))`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleTree {
    /// All levels, leaves first: `levels[0]` = leaves, last level = `[root]`.
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Build a tree with the default configuration.
    pub fn build(leaf_set: &LeafSet) -> Result<Self, CommitmentError> {
        Self::build_with_config(leaf_set, &CommitmentConfig::default())
    }

    /// Build a tree.
    ///
    /// ## Errors
    ///
    /// - `EmptyLeafSet` if the set has no addresses
    /// - `TooManyLeaves` if the set exceeds `config.max_leaves`
    pub fn build_with_config(
        leaf_set: &LeafSet,
        config: &CommitmentConfig,
    ) -> Result<Self, CommitmentError> {
        if leaf_set.is_empty() {
            return Err(CommitmentError::EmptyLeafSet);
        }
        if leaf_set.len() > config.max_leaves {
            return Err(CommitmentError::TooManyLeaves {
                count: leaf_set.len(),
                max: config.max_leaves,
            });
        }

        let mut levels = vec![leaf_set.leaves().to_vec()];
        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let next = Self::hash_level(level, config);
            levels.push(next);
        }

        Ok(Self { levels })
    }

    fn hash_level(level: &[Hash], config: &CommitmentConfig) -> Vec<Hash> {
        let pair = |chunk: &[Hash]| match chunk {
            [left, right] => hash_sorted_pair(left, right),
            [odd] => hash_sorted_pair(odd, odd),
            _ => unreachable!("chunks(2) yields one or two nodes"),
        };

        if config.is_parallel(level.len()) {
            level.par_chunks(2).map(pair).collect()
        } else {
            level.chunks(2).map(pair).collect()
        }
    }

    /// The committed root.
    pub fn root(&self) -> Hash {
        // build() guarantees at least one level ending in a single node
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or_default()
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    /// Number of hashing levels above the leaves; equals every proof's length.
    pub fn depth(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// Sibling path for a leaf already known to be in the tree.
    ///
    /// Returns None if `leaf` is not one of this tree's leaves.
    pub fn proof_for_leaf(&self, leaf: &Hash) -> Option<Vec<Hash>> {
        let mut index = self.levels.first()?.binary_search(leaf).ok()?;

        let mut siblings = Vec::with_capacity(self.depth());
        for level in &self.levels[..self.depth()] {
            let sibling = level.get(index ^ 1).unwrap_or(&level[index]);
            siblings.push(*sibling);
            index /= 2;
        }
        Some(siblings)
    }

    /// Generate a proof for `address`, which must be a member of `leaf_set`.
    ///
    /// ## Errors
    ///
    /// - `KeyNotFound` if the address is not a member (checked by membership,
    ///   not by looking for a matching hash)
    pub fn generate_proof(
        &self,
        leaf_set: &LeafSet,
        address: &Address,
    ) -> Result<MerkleProof, CommitmentError> {
        if !leaf_set.contains(address) {
            return Err(CommitmentError::KeyNotFound { address: *address });
        }

        let leaf = leaf_hash(address);
        let siblings = self
            .proof_for_leaf(&leaf)
            .ok_or(CommitmentError::KeyNotFound { address: *address })?;

        Ok(MerkleProof {
            address: *address,
            leaf,
            siblings,
            root: self.root(),
        })
    }
}

/// An inclusion proof for one allowlisted address.
///
/// Only `siblings` crosses into the mint gate; the other fields are kept for
/// display and self-checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// The address being proven.
    pub address: Address,
    /// `keccak256(address)`.
    pub leaf: Hash,
    /// Sibling hashes from leaf to root.
    pub siblings: Vec<Hash>,
    /// The root this proof was generated against.
    pub root: Hash,
}

impl MerkleProof {
    /// Check this proof against its own recorded root.
    pub fn verify(&self) -> bool {
        verify(&self.root, &self.address, &self.siblings)
    }

    /// Check this proof against an arbitrary root.
    pub fn verify_against(&self, root: &Hash) -> bool {
        verify(root, &self.address, &self.siblings)
    }

    /// Siblings as `0x` hex strings, the transport format.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.siblings.iter().map(Hash::to_hex).collect()
    }
}

/// Statistics about the commitment service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentStats {
    /// Distinct addresses committed.
    pub leaf_count: usize,
    /// Proof length for every member.
    pub tree_depth: usize,
    /// Proofs handed out.
    pub proofs_generated: u64,
    /// Verification requests that passed.
    pub proofs_verified: u64,
    /// Verification requests that failed.
    pub proofs_rejected: u64,
}
