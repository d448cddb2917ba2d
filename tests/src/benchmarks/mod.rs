//! # FjordDrop Benchmarks
//!
//! Performance benchmarks per subsystem.

pub mod fd_01_commitment;
