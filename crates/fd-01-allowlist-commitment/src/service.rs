//! # Commitment Service
//!
//! Holds one built commitment and answers root/proof lookups against it.
//! This is the off-chain collaborator minters query before calling
//! `allowlist_mint`.

use shared_types::{verify, Address, Hash};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::domain::{
    CommitmentConfig, CommitmentError, CommitmentStats, LeafSet, MerkleProof, MerkleTree,
};
use crate::ports::{AllowlistSource, CommitmentApi, SourceError};

/// Failure to load and commit an allowlist.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The loaded list could not be committed.
    #[error(transparent)]
    Commitment(#[from] CommitmentError),
}

/// A built allowlist commitment plus lookup statistics.
#[derive(Debug, Clone)]
pub struct CommitmentService {
    leaf_set: LeafSet,
    tree: MerkleTree,
    stats: CommitmentStats,
}

impl CommitmentService {
    /// Commit an already-parsed leaf set.
    pub fn new(leaf_set: LeafSet, config: &CommitmentConfig) -> Result<Self, CommitmentError> {
        let tree = MerkleTree::build_with_config(&leaf_set, config)?;
        let stats = CommitmentStats {
            leaf_count: tree.leaf_count(),
            tree_depth: tree.depth(),
            ..CommitmentStats::default()
        };

        info!(
            leaves = stats.leaf_count,
            depth = stats.tree_depth,
            root = %tree.root(),
            "Allowlist committed"
        );

        Ok(Self {
            leaf_set,
            tree,
            stats,
        })
    }

    /// Load an allowlist from `source` and commit it.
    #[instrument(skip_all, fields(origin = %source.describe()))]
    pub fn from_source<S: AllowlistSource + ?Sized>(
        source: &S,
        config: &CommitmentConfig,
    ) -> Result<Self, LoadError> {
        let raw = source.load()?;
        debug!(entries = raw.len(), "Allowlist loaded");

        let leaf_set = LeafSet::with_config(parse_all(&raw)?, config);
        if leaf_set.len() < raw.len() {
            warn!(
                entries = raw.len(),
                distinct = leaf_set.len(),
                "Duplicate addresses collapsed"
            );
        }

        Ok(Self::new(leaf_set, config)?)
    }

    /// The committed leaf set.
    pub fn leaf_set(&self) -> &LeafSet {
        &self.leaf_set
    }

    /// The built tree.
    pub fn tree(&self) -> &MerkleTree {
        &self.tree
    }

    /// `getMerkleRoot`: the root as `0x` hex.
    pub fn get_merkle_root(&self) -> String {
        self.tree.root().to_hex()
    }

    /// `getMerkleProof`: the proof for a hex address as `0x` hex strings.
    pub fn get_merkle_proof(&mut self, address: &str) -> Result<Vec<String>, CommitmentError> {
        let address = parse_address(address)?;
        self.generate_proof(&address)
            .map(|proof| proof.to_hex_strings())
    }
}

impl CommitmentApi for CommitmentService {
    fn merkle_root(&self) -> Hash {
        self.tree.root()
    }

    fn generate_proof(&mut self, address: &Address) -> Result<MerkleProof, CommitmentError> {
        let proof = self.tree.generate_proof(&self.leaf_set, address)?;
        self.stats.proofs_generated += 1;
        debug!(%address, siblings = proof.siblings.len(), "Proof generated");
        Ok(proof)
    }

    fn verify_proof(&mut self, address: &Address, proof: &[Hash]) -> bool {
        let valid = verify(&self.tree.root(), address, proof);
        if valid {
            self.stats.proofs_verified += 1;
        } else {
            self.stats.proofs_rejected += 1;
        }
        valid
    }

    fn is_allowlisted(&self, address: &Address) -> bool {
        self.leaf_set.contains(address)
    }

    fn get_stats(&self) -> CommitmentStats {
        self.stats.clone()
    }
}

fn parse_address(input: &str) -> Result<Address, CommitmentError> {
    Address::from_hex(input).map_err(|source| CommitmentError::InvalidAddress {
        input: input.to_string(),
        source,
    })
}

fn parse_all(raw: &[String]) -> Result<Vec<Address>, CommitmentError> {
    raw.iter().map(|s| parse_address(s)).collect()
}
