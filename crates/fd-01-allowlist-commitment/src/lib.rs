//! # Allowlist Commitment Subsystem (fd-01)
//!
//! Builds the Merkle commitment over the set of addresses eligible for the
//! allowlist mint, and issues inclusion proofs for individual addresses.
//!
//! ## Responsibilities
//!
//! - Canonicalize an allowlist into a [`LeafSet`] (sorted, de-duplicated leaves)
//! - Compute the Merkle root published into the mint gate
//! - Extract sibling-path proofs for any member address
//! - Serve `getMerkleRoot` / `getMerkleProof` lookups to minters
//!
//! ## Flow
//!
//! ```text
//! allowlist file ──→ AllowlistSource ──→ LeafSet ──→ MerkleTree ──→ root (0x…)
//!                                                        │
//!                                  getMerkleProof(addr) ─┘──→ ["0x…", …]
//! ```
//!
//! The mint gate (fd-02) never calls into this crate. It only receives the
//! root, and checks proofs with `shared_types::verify`.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | INVARIANT-1 | Order Independence | `LeafSet` sorts and de-duplicates leaves |
//! | INVARIANT-2 | Proof Validity | Every generated proof verifies against the root |
//! | INVARIANT-3 | Fixed Proof Length | Odd nodes pair with themselves, so proofs have ceil(log2 n) siblings |
//! | INVARIANT-4 | Membership Gate | Proofs are only issued for member addresses |
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): Pure tree logic, no I/O
//! - **Ports Layer** (`ports/`): `CommitmentApi` inbound, `AllowlistSource` outbound
//! - **Adapters Layer** (`adapters/`): allowlist files, JSON query handler

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{
    build_proof, build_root, CommitmentConfig, CommitmentError, CommitmentStats, LeafSet,
    MerkleProof, MerkleTree, MAX_LEAVES, PARALLEL_THRESHOLD,
};

pub use ports::{AllowlistSource, CommitmentApi, SourceError};

pub use adapters::{
    handle_api_query, ApiQueryError, ApiQueryHandler, FileAllowlist, StaticAllowlist,
    DEV_ALLOWLIST,
};

pub use service::{CommitmentService, LoadError};

pub use shared_types::verify;
