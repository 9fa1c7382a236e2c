//! Criterion benchmarks for the forward DP optimizer.
//!
//! Measures planning time for a cross-country trip as the number of projected
//! candidates grows. Candidate density drives the inner-loop window, so the
//! largest size shows how close the solver stays to linear time.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package fuelstop-solver-dp
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fuelstop_core::test_support::projected;
use fuelstop_core::{ProjectedCandidate, StopOptimizer, VehicleProfile};
use fuelstop_solver_dp::ForwardDpOptimizer;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic candidate generation.
const BENCHMARK_SEED: u64 = 42;

/// Candidate counts to benchmark.
const CANDIDATE_COUNTS: &[usize] = &[100, 1_000, 10_000];

/// Trip length in miles, roughly New York to Los Angeles.
const TRIP_MILES: f64 = 2_800.0;

fn generate_candidates(count: usize, seed: u64) -> Vec<ProjectedCandidate> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut candidates: Vec<ProjectedCandidate> = (0..count)
        .map(|idx| {
            let miles = rng.gen_range(0.0..TRIP_MILES);
            let price = rng.gen_range(2.5..4.5);
            projected(&idx.to_string(), miles, price)
        })
        .collect();
    candidates.sort_by(|a, b| a.distance_from_start.total_cmp(&b.distance_from_start));
    candidates
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    let optimizer = ForwardDpOptimizer::new();
    let vehicle = VehicleProfile::default();

    for &count in CANDIDATE_COUNTS {
        let candidates = generate_candidates(count, BENCHMARK_SEED);
        let throughput_size = u64::try_from(count).unwrap_or(u64::MAX);
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(
            BenchmarkId::new("candidates", count),
            &candidates,
            |b, input| {
                b.iter(|| {
                    #[expect(
                        clippy::let_underscore_must_use,
                        reason = "Benchmarking planning performance, result is intentionally discarded"
                    )]
                    let _ = optimizer.optimize(input, TRIP_MILES, &vehicle);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_optimize);
criterion_main!(benches);
