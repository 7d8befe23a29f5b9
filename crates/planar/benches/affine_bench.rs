//! Criterion benchmarks for affine transform composition and application.
//! Focus sizes: pipeline length n in {0, 4, 16, 64}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planar::geom2::affine::{combining, rotation, scaling, skewing, transform, translating};
use planar::{V2Transform, V2};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_pipeline(n: usize, seed: u64) -> Vec<V2Transform> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|k| match k % 4 {
            0 => rotation(rng.gen_range(-3.0..3.0)),
            1 => scaling(rng.gen_range(0.5..2.0), Some(rng.gen_range(0.5..2.0))),
            2 => skewing(rng.gen_range(-0.5..0.5), None),
            _ => translating(V2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0))),
        })
        .collect()
}

fn bench_affine(c: &mut Criterion) {
    let mut group = c.benchmark_group("affine");
    for &n in &[0usize, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("combining", n), &n, |b, &n| {
            b.iter_batched(
                || random_pipeline(n, 43),
                |ts| {
                    let _t = combining(&ts);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("apply_sequential", n), &n, |b, &n| {
            let ts = random_pipeline(n, 44);
            let v = V2::new(0.3, -0.2);
            b.iter(|| ts.iter().fold(v, |p, t| transform(p, t)))
        });

        group.bench_with_input(BenchmarkId::new("apply_combined", n), &n, |b, &n| {
            let t = combining(&random_pipeline(n, 44));
            let v = V2::new(0.3, -0.2);
            b.iter(|| transform(v, &t))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_affine);
criterion_main!(benches);
