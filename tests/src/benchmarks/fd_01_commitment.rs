//! # FD-01 Allowlist Commitment Benchmarks
//!
//! Claims to validate:
//! - Tree construction: O(n) hashes, parallel above `PARALLEL_THRESHOLD`
//! - Proof extraction from a built tree: O(log n)
//! - Verification: O(log n), no allowlist needed
//!
//! Brutal Conditions:
//! - 100k-member allowlists (depth 17)
//! - Random, unsorted input

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use fd_01_allowlist_commitment::{CommitmentConfig, LeafSet, MerkleTree};
use rand::Rng;
use shared_types::{verify, Address};
use std::time::Duration;

fn random_addresses(count: usize) -> Vec<Address> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let mut bytes = [0u8; 20];
            rng.fill(&mut bytes);
            Address::new(bytes)
        })
        .collect()
}

pub fn brutal_tree_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("fd-01/brutal/tree_build");
    group.measurement_time(Duration::from_secs(10));

    for count in [1_000, 10_000, 100_000] {
        let addresses = random_addresses(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("parallel", count), &addresses, |b, a| {
            b.iter(|| {
                let set = LeafSet::new(a.iter().copied());
                black_box(MerkleTree::build(&set).map(|t| t.root()))
            })
        });

        let sequential = CommitmentConfig {
            parallel_threshold: usize::MAX,
            ..CommitmentConfig::default()
        };
        group.bench_with_input(BenchmarkId::new("sequential", count), &addresses, |b, a| {
            b.iter(|| {
                let set = LeafSet::with_config(a.iter().copied(), &sequential);
                black_box(MerkleTree::build_with_config(&set, &sequential).map(|t| t.root()))
            })
        });
    }
    group.finish();
}

pub fn brutal_proof_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("fd-01/brutal/proof");
    group.measurement_time(Duration::from_secs(10));

    for count in [1_000, 100_000] {
        let addresses = random_addresses(count);
        let set = LeafSet::new(addresses.iter().copied());
        let Ok(tree) = MerkleTree::build(&set) else {
            continue;
        };
        let target = addresses[count / 2];

        group.bench_with_input(BenchmarkId::new("generate", count), &target, |b, t| {
            b.iter(|| black_box(tree.generate_proof(&set, t)))
        });

        if let Ok(proof) = tree.generate_proof(&set, &target) {
            let root = tree.root();
            group.bench_with_input(BenchmarkId::new("verify", count), &proof, |b, p| {
                b.iter(|| black_box(verify(&root, &p.address, &p.siblings)))
            });
        }
    }
    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    brutal_tree_construction(c);
    brutal_proof_generation(c);
}
