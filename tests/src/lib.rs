//! # FjordDrop Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks per subsystem
//! │   └── fd_01_commitment.rs
//! │
//! ├── exploits/         # Attack simulations against the sale
//! │   ├── proof_abuse.rs
//! │   └── race.rs
//! │
//! └── integration/      # Commitment builder → mint gate flows
//!     └── flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p fd-tests
//!
//! # By category
//! cargo test -p fd-tests integration::
//! cargo test -p fd-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p fd-tests
//! ```

#![allow(dead_code)]

pub mod benchmarks;
pub mod exploits;
pub mod integration;
