//! Hashimoto Criterion Benchmarks
//!
//! Setup cost (cache expansion), the per-call evaluation latency, and the
//! DAG-heavy deep-mix configuration.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use hashimoto::{Evaluator, Params};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;

fn demo_params(cache_size: usize) -> Params {
    Params {
        cache_size,
        cache_rounds: 3,
        dag_size: 1 << 24,
        dag_parents: 64,
        mix_size: 128,
        mix_parents: 64,
    }
}

// =============================================================================
// BENCHMARK 1: SETUP
// =============================================================================

/// Cache expansion dominated by sequential Keccak-512 chaining.
fn bench_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Setup");
    group.sample_size(10);

    let sizes = [(64 * KB, "64KB"), (256 * KB, "256KB"), (KB * KB, "1MB")];

    for (size, name) in sizes {
        let params = demo_params(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &params,
            |b, params| b.iter(|| Evaluator::new(black_box(*params), &[0u8; 32]).unwrap()),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: EVALUATION LATENCY
// =============================================================================

/// Per-call latency against a prebuilt cache.
fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Hash");

    let evaluator = Evaluator::new(demo_params(256 * KB), &[0u8; 32]).unwrap();
    let mut rng = rand::rng();
    let header: [u8; 32] = rng.random();

    group.bench_function("hash", |b| {
        let mut nonce_val: u64 = 0;
        b.iter(|| {
            nonce_val = nonce_val.wrapping_add(1);
            evaluator.hash(black_box(&header), &nonce_val.to_le_bytes())
        });
    });

    group.bench_function("hash_full", |b| {
        let mut nonce_val: u64 = 0;
        b.iter(|| {
            nonce_val = nonce_val.wrapping_add(1);
            evaluator.hash_full(black_box(&header), &nonce_val.to_le_bytes())
        });
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 3: DEEP MIX
// =============================================================================

/// Scaling of the outer mix loop: every doubling doubles DAG-node work.
fn bench_deep_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Deep-Mix");

    for mix_parents in [16usize, 64, 256] {
        let mut params = demo_params(256 * KB);
        params.mix_parents = mix_parents;
        let evaluator = Evaluator::new(params, &[0u8; 32]).unwrap();

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(mix_parents),
            &evaluator,
            |b, evaluator| {
                let mut nonce_val: u64 = 0;
                b.iter(|| {
                    nonce_val = nonce_val.wrapping_add(1);
                    evaluator.hash(&[0u8; 32], &nonce_val.to_le_bytes())
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_setup, bench_hash, bench_deep_mix);
criterion_main!(benches);
