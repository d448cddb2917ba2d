//! # Domain Layer
//!
//! Pure domain logic for the Allowlist Commitment subsystem.
//!
//! - `entities`: LeafSet, MerkleTree, MerkleProof
//! - `services`: `build_root` / `build_proof` free functions
//! - `value_objects`: configuration and limits
//!
//! This module contains NO I/O dependencies. All external interactions
//! are abstracted through ports in the `ports` module.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use services::*;
pub use value_objects::*;
