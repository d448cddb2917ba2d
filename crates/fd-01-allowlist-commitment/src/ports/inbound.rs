//! # Inbound Ports (Driving Ports)
//!
//! Public API exposed by the Allowlist Commitment subsystem.

use crate::domain::{CommitmentError, CommitmentStats, MerkleProof};
use shared_types::{Address, Hash};

/// Primary API for the Allowlist Commitment subsystem.
///
/// This is what the lookup service offers to minters before they call
/// `allowlist_mint` on the gate.
pub trait CommitmentApi {
    /// The committed root.
    fn merkle_root(&self) -> Hash;

    /// Generate a proof for a member address.
    ///
    /// ## Returns
    ///
    /// - `Ok(MerkleProof)`: proof verifying against `merkle_root()`
    /// - `Err(KeyNotFound)`: address not on the allowlist
    fn generate_proof(&mut self, address: &Address) -> Result<MerkleProof, CommitmentError>;

    /// Check a caller-supplied proof against the committed root.
    fn verify_proof(&mut self, address: &Address, proof: &[Hash]) -> bool;

    /// Whether the address is on the allowlist.
    fn is_allowlisted(&self, address: &Address) -> bool;

    /// Get service statistics.
    fn get_stats(&self) -> CommitmentStats;
}
