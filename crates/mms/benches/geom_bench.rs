//! Criterion benchmarks for the per-tick geometry queries.
//! Focus sizes: polygon count k in {1, 4, 16}, 12 vertices each.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use mms::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn scattered_polygons(k: usize, seed: u64) -> Vec<Polygon> {
    (0..k as u64)
        .map(|index| {
            // neighbours overlap so the union stays connected
            let shift = Cartesian::from_meters(index as f64 * 1.2, 0.0);
            draw_polygon_radial(RadialCfg::default(), ReplayToken { seed, index }).translated(shift)
        })
        .collect()
}

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel");
    let mut rng = StdRng::seed_from_u64(41);
    let segs: Vec<Segment> = (0..256)
        .map(|_| {
            let mut p = || Cartesian::from_meters(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            Segment::new(p(), p())
        })
        .collect();
    group.bench_function("lines_intersect_256", |b| {
        b.iter(|| segs.windows(2).filter(|w| lines_intersect(&w[0], &w[1])).count())
    });
    group.bench_function("intersection_point_256", |b| {
        b.iter(|| {
            segs.windows(2)
                .filter_map(|w| intersection_point(&w[0], &w[1]).ok())
                .count()
        })
    });
    group.finish();
}

fn bench_polygons(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygons");
    for &k in &[1usize, 4, 16] {
        group.bench_with_input(BenchmarkId::new("convex_hull", k), &k, |b, &k| {
            b.iter_batched(
                || scattered_polygons(k, 43),
                |polys| {
                    let _hull = convex_hull(&polys).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("polygon_union", k), &k, |b, &k| {
            b.iter_batched(
                || scattered_polygons(k, 44),
                |polys| {
                    let _outline = polygon_union(&polys).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("cast_ray", k), &k, |b, &k| {
            let walls = scattered_polygons(k, 45);
            let ray = Segment::new(
                Cartesian::from_meters(-2.0, 0.1),
                Cartesian::from_meters(30.0, 0.1),
            );
            b.iter(|| cast_ray(&ray, &walls))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kernel, bench_polygons);
criterion_main!(benches);
