//! Criterion benchmarks for QuickHull.
//! Focus sizes: n in {0, 10, 50, 100, 200} (the canvas caps out at 200).

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2::scatter::{draw_scatter, ReplayToken, ScatterCfg, Spread};
use hull2::{compute_hull, Vec2};

fn scattered_points(n: usize, seed: u64, spread: Spread) -> Vec<Vec2<f64>> {
    let cfg = ScatterCfg {
        count: n,
        spread,
        ..ScatterCfg::default()
    };
    draw_scatter(cfg, ReplayToken { seed, index: 0 })
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull2");
    for &n in &[0usize, 10, 50, 100, 200] {
        group.bench_with_input(BenchmarkId::new("compute_hull_clustered", n), &n, |b, &n| {
            b.iter_batched(
                || scattered_points(n, 43, Spread::Clustered),
                |pts| {
                    let _hull = compute_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("compute_hull_uniform", n), &n, |b, &n| {
            b.iter_batched(
                || scattered_points(n, 44, Spread::Uniform),
                |pts| {
                    let _hull = compute_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
