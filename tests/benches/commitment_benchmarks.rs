//! # FjordDrop Commitment Benchmarks
//!
//! | Subsystem | Claim | Target |
//! |-----------|-------|--------|
//! | fd-01 Allowlist Commitment | 100k-member root | < 1s |
//! | fd-01 Allowlist Commitment | Proof generation | < 10µs |
//! | fd-01 Allowlist Commitment | Proof verification | < 50µs |

use criterion::{criterion_group, criterion_main};
use fd_tests::benchmarks::fd_01_commitment;

criterion_group!(benches, fd_01_commitment::register_benchmarks);
criterion_main!(benches);
