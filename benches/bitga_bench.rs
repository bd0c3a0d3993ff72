//! Criterion benchmarks for the bit-string GA.
//!
//! Uses OneMax (count of set bits) so the measurement is dominated by
//! engine overhead rather than fitness evaluation.

use bitga::ga::operators::{bit_flip_mutation, single_point_crossover};
use bitga::ga::{GaEngine, GaParams, Genome};
use bitga::random::create_rng;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn one_max(genome: &[u8]) -> f64 {
    genome.iter().map(|b| b.count_ones()).sum::<u32>() as f64
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve_onemax");
    group.sample_size(10);

    for (bits, pool, gen) in [(64usize, 64usize, 50usize), (1024, 64, 20), (4096, 128, 10)] {
        let params = GaParams::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("b{}_p{}_g{}", bits, pool, gen), bits),
            &(bits, pool, gen, params),
            |b, (bits, pool, gen, params)| {
                b.iter(|| {
                    let mut engine =
                        GaEngine::init(*pool, *bits, one_max, params.clone()).unwrap();
                    engine.evolve_generations(*gen).unwrap();
                    black_box(engine.best().fitness())
                })
            },
        );
    }
    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");

    for &bytes in &[16usize, 128, 1024] {
        let mut rng = create_rng(42);
        let p1 = Genome::random(bytes, &mut rng);
        let p2 = Genome::random(bytes, &mut rng);

        group.bench_with_input(BenchmarkId::new("crossover", bytes), &(p1.clone(), p2), |b, (p1, p2)| {
            b.iter(|| black_box(single_point_crossover(p1, p2, &mut rng)))
        });

        let mut genome = p1;
        let mut rng = create_rng(7);
        group.bench_with_input(BenchmarkId::new("mutation", bytes), &bytes, |b, _| {
            b.iter(|| black_box(bit_flip_mutation(&mut genome, 0.002, &mut rng)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evolve, bench_operators);
criterion_main!(benches);
