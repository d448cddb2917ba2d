//! # Shared Types Crate
//!
//! Value types and the Merkle wire contract shared by the commitment builder
//! (fd-01) and the mint gate (fd-02).
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Address`, `Hash` and the hashing rules used
//!   to build and verify allowlist proofs are defined exactly once, here.
//! - **No Runtime Coupling**: fd-01 and fd-02 both depend on this crate and
//!   never on each other. The committed root is the only thing they share.
//! - **Fixed Encoding**: addresses and hashes travel as `0x`-prefixed hex.

pub mod entities;
pub mod errors;
pub mod merkle;

pub use entities::*;
pub use errors::*;
pub use merkle::{hash_sorted_pair, keccak256, leaf_hash, process_proof, verify};
