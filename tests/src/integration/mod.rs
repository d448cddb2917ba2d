//! # Integration Tests
//!
//! The commitment builder and the mint gate only share a root and proofs.
//! These flows drive both ends the way a deployment would.

pub mod flows;
