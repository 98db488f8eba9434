//! Benchmarks for population generation and percentile analysis.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tailsample::{analyze, generate, DistributionKind};

const POPULATION_SIZE: usize = 10_000;
const SAMPLE_PERCENT: f64 = 20.0;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for kind in [
        DistributionKind::Lognormal,
        DistributionKind::Weibull,
        DistributionKind::Pareto,
        DistributionKind::Multimodal,
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| generate(black_box(POPULATION_SIZE), kind, &mut rng).unwrap());
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let base = generate(POPULATION_SIZE, DistributionKind::Lognormal, &mut rng).unwrap();

    c.bench_function("analyze", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        b.iter(|| {
            let mut population = base.clone();
            analyze(black_box(&mut population), SAMPLE_PERCENT, &mut rng).unwrap()
        });
    });
}

criterion_group!(benches, bench_generate, bench_analyze);
criterion_main!(benches);
