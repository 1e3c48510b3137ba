//! Criterion benchmarks for the knapsack GA.
//!
//! Uses synthetic instances with pseudo-random items so the numbers measure
//! the evolutionary loop rather than any particular dataset.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use knapsack_ga::ga::{GaConfig, GaRunner, Selection};
use knapsack_ga::Catalog;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ===========================================================================
// Synthetic instance: capacity is half the total weight
// ===========================================================================

fn synthetic_catalog(n: usize) -> Catalog {
    let mut rng = StdRng::seed_from_u64(7);
    let pairs: Vec<(f64, f64)> = (0..n)
        .map(|_| {
            (
                rng.random_range(1..100) as f64,
                rng.random_range(1..50) as f64,
            )
        })
        .collect();
    let capacity = pairs.iter().map(|&(_, w)| w).sum::<f64>() / 2.0;
    Catalog::from_pairs(&pairs, capacity).expect("synthetic catalog is valid")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_selection(c: &mut Criterion, name: &str, selection: Selection) {
    let mut group = c.benchmark_group(name);
    group.sample_size(10);

    for (n, pop, gen) in [(20usize, 50usize, 50usize), (100, 100, 50), (500, 100, 20)] {
        let catalog = synthetic_catalog(n);
        let config = GaConfig {
            population_size: pop,
            max_generations: gen,
            mating_pool_size: pop,
            selection,
            seed: Some(42),
            ..GaConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &(catalog, config),
            |b, (cat, cfg)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(cat), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_elitism(c: &mut Criterion) {
    bench_selection(c, "ga_elitism", Selection::Elitism);
}

fn bench_roulette(c: &mut Criterion) {
    bench_selection(c, "ga_roulette", Selection::RouletteWheel);
}

criterion_group!(benches, bench_elitism, bench_roulette);
criterion_main!(benches);
