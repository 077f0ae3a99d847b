// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lookout_interval::{Aabb2D, Interval, IntervalTree, IntervalTree2D};

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

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: i64) -> i64 {
        (self.next_u64() % n as u64) as i64
    }
}

fn gen_random_intervals(count: usize, span: i64, max_len: i64) -> Vec<Interval<i64>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let min = rng.below(span);
        out.push(Interval::new(min, min + rng.below(max_len)));
    }
    out
}

fn gen_random_rects_i64(count: usize, extent: i64, size: i64) -> Vec<Aabb2D<i64>> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x0 = rng.below(extent - size);
        let y0 = rng.below(extent - size);
        out.push(Aabb2D::<i64>::from_xywh(x0, y0, size, size));
    }
    out
}

fn bench_tree_1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_tree");
    for &n in &[1_000usize, 10_000, 100_000] {
        let intervals = gen_random_intervals(n, 1_000_000, 5_000);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("insert_random_n{}", n), |b| {
            b.iter_batched(
                IntervalTree::<i64, u32>::new,
                |mut tree| {
                    for (i, iv) in intervals.iter().copied().enumerate() {
                        let _ = tree.insert(iv, i as u32);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("insert_sorted_n{}", n), |b| {
            b.iter_batched(
                IntervalTree::<i64, u32>::new,
                |mut tree| {
                    for i in 0..n as i64 {
                        let _ = tree.insert(Interval::new(i, i + 10), i as u32);
                    }
                    black_box(tree.root_level());
                },
                BatchSize::SmallInput,
            )
        });

        let tree: IntervalTree<i64, u32> = intervals
            .iter()
            .copied()
            .enumerate()
            .map(|(i, iv)| (iv, i as u32))
            .collect();
        group.bench_function(format!("items_at_n{}", n), |b| {
            let mut x = 0_i64;
            b.iter(|| {
                x = (x + 7_919) % 1_000_000;
                black_box(tree.items_at(x).count())
            })
        });
        group.bench_function(format!("items_within_n{}", n), |b| {
            let mut x = 0_i64;
            b.iter(|| {
                x = (x + 7_919) % 1_000_000;
                black_box(tree.items_within(x, x + 2_000).count())
            })
        });
        group.bench_function(format!("remove_all_n{}", n), |b| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| {
                    for iv in &intervals {
                        black_box(tree.remove(*iv));
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_tree_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_tree_2d");
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects_i64(n, 10);
        let query = Aabb2D::<i64>::from_xywh(100, 100, 400, 400);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("insert_query_grid_n{}", n), |b| {
            b.iter_batched(
                IntervalTree2D::<i64, u32>::new,
                |mut tree| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        let _ = tree.insert(r, i as u32);
                    }
                    black_box(tree.items_within(query).count());
                },
                BatchSize::SmallInput,
            )
        });
    }

    let rects = gen_random_rects_i64(4096, 2000, 12);
    let mut tree = IntervalTree2D::<i64, u32>::new();
    for (i, r) in rects.iter().copied().enumerate() {
        let _ = tree.insert(r, i as u32);
    }
    group.throughput(Throughput::Elements(1));
    group.bench_function("items_within_random", |b| {
        let query = Aabb2D::<i64>::from_xywh(800, 800, 400, 400);
        b.iter(|| black_box(tree.items_within(query).count()))
    });
    group.bench_function("items_at_random", |b| {
        b.iter(|| black_box(tree.items_at(1000, 1000).count()))
    });
    group.bench_function("linear_scan_random", |b| {
        let query = Aabb2D::<i64>::from_xywh(800, 800, 400, 400);
        b.iter(|| black_box(rects.iter().filter(|r| r.intersects(&query)).count()))
    });
    group.finish();
}

criterion_group!(benches, bench_tree_1d, bench_tree_2d);
criterion_main!(benches);
