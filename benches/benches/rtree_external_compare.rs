// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lookout_interval::{Aabb2D, IntervalTree2D};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn gen_grid_rects_i64(n: usize, cell: i64) -> Vec<Aabb2D<i64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as i64 * cell;
            let y0 = y as i64 * cell;
            out.push(Aabb2D::<i64>::from_xywh(x0, y0, cell, cell));
        }
    }
    out
}

fn to_rstar_rects(v: &[Aabb2D<i64>]) -> Vec<Rectangle<[i64; 2]>> {
    v.iter()
        .map(|r| Rectangle::from_corners([r.min_x, r.min_y], [r.max_x, r.max_y]))
        .collect()
}

fn bench_rtree_external_compare_i64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare_i64");
    for &n in &[64usize, 128] {
        let rects = gen_grid_rects_i64(n, 10);
        let aabb_query = Aabb2D::<i64>::from_xywh(100, 100, 400, 400);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("interval2d_build_query_n{}", n), |b| {
            b.iter_batched(
                IntervalTree2D::<i64, u32>::new,
                |mut tree| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        let _ = tree.insert(r, i as u32);
                    }
                    let hits: usize = tree.items_within(aabb_query).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_n{}", n), |b| {
            b.iter_batched(
                RTree::<Rectangle<[i64; 2]>>::new,
                |mut tree| {
                    for r in to_rstar_rects(&rects) {
                        tree.insert(r);
                    }
                    let aabb = AABB::from_corners(
                        [aabb_query.min_x, aabb_query.min_y],
                        [aabb_query.max_x, aabb_query.max_y],
                    );
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let aabb = AABB::from_corners(
                        [aabb_query.min_x, aabb_query.min_y],
                        [aabb_query.max_x, aabb_query.max_y],
                    );
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        let mut tree = IntervalTree2D::<i64, u32>::new();
        for (i, r) in rects.iter().copied().enumerate() {
            let _ = tree.insert(r, i as u32);
        }
        let rtree = RTree::bulk_load(to_rstar_rects(&rects));
        group.bench_function(format!("interval2d_query_only_n{}", n), |b| {
            b.iter(|| black_box(tree.items_within(aabb_query).count()))
        });
        group.bench_function(format!("rstar_query_only_n{}", n), |b| {
            let aabb = AABB::from_corners(
                [aabb_query.min_x, aabb_query.min_y],
                [aabb_query.max_x, aabb_query.max_y],
            );
            b.iter(|| black_box(rtree.locate_in_envelope_intersecting(&aabb).count()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare_i64);
criterion_main!(benches);
