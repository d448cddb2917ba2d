//! # Value Objects
//!
//! Limits and configuration for commitment construction.

use serde::{Deserialize, Serialize};

/// Leaf count at which hashing switches to rayon parallel iterators.
///
/// Below this, thread hand-off costs more than the hashing it saves.
pub const PARALLEL_THRESHOLD: usize = 1024;

/// Hard upper bound on allowlist size (2^24 leaves, proof depth 24).
pub const MAX_LEAVES: usize = 1 << 24;

/// Configuration for building a commitment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentConfig {
    /// Leaf count at or above which hashing runs in parallel.
    pub parallel_threshold: usize,
    /// Maximum number of distinct addresses accepted.
    pub max_leaves: usize,
}

impl Default for CommitmentConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: PARALLEL_THRESHOLD,
            max_leaves: MAX_LEAVES,
        }
    }
}

impl CommitmentConfig {
    /// Config that forces the parallel path even for tiny sets.
    pub fn for_testing() -> Self {
        Self {
            parallel_threshold: 2,
            max_leaves: 64,
        }
    }

    /// Whether a level of `len` nodes should be hashed in parallel.
    pub fn is_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }
}
