//! Benchmark for noise sampling.
//!
//! Every generated world samples the field five times per column, and the
//! caustics sample it once per floor voxel per frame.
//!
//! Run with: cargo bench --package abyss_procedural --bench noise_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use abyss_procedural::noise::{PerlinNoise, PermutationTable, WorldSeed};

fn benchmark_single_sample(c: &mut Criterion) {
    let noise = PerlinNoise::new(WorldSeed::new(42));

    c.bench_function("single_perlin_sample", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(noise.sample(black_box(x), black_box(x * 0.7)))
        });
    });
}

fn benchmark_million_samples(c: &mut Criterion) {
    let noise = PerlinNoise::new(WorldSeed::new(42));

    let mut group = c.benchmark_group("million_samples");
    group.throughput(Throughput::Elements(1_000_000));
    group.sample_size(10);

    group.bench_function("1M_perlin_samples", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for z in 0..1000 {
                for x in 0..1000 {
                    sum += noise.sample(f64::from(x) * 0.12, f64::from(z) * 0.12);
                }
            }
            black_box(sum)
        });
    });

    group.finish();
}

fn benchmark_table_build(c: &mut Criterion) {
    c.bench_function("permutation_table_from_seed", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(PermutationTable::from_seed(WorldSeed::new(seed)))
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_sample,
    benchmark_million_samples,
    benchmark_table_build
);
criterion_main!(benches);
