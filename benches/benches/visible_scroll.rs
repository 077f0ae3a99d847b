// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lookout_interval::Aabb2D;
use lookout_viewport::VisibleIndex;

type Item = (Aabb2D<i64>, u32);

fn gen_grid_items(n: usize, cell: i64, size: i64) -> Vec<Item> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let r = Aabb2D::<i64>::from_xywh(x as i64 * cell, y as i64 * cell, size, size);
            out.push((r, (y * n + x) as u32));
        }
    }
    out
}

fn build(items: &[Item]) -> VisibleIndex<i64, Item> {
    let mut index = VisibleIndex::new();
    for item in items {
        let _ = index.insert(*item);
    }
    index
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_scroll");
    for &n in &[64usize, 256] {
        let items = gen_grid_items(n, 20, 16);
        let extent = n as i64 * 20;
        group.throughput(Throughput::Elements(1));

        // Small steps: most of the visible set survives each move.
        group.bench_function(format!("pan_by_8_n{}", n), |b| {
            let mut index = build(&items);
            let mut y = 0_i64;
            b.iter(|| {
                y = (y + 8) % (extent - 600);
                black_box(index.make_visible(Aabb2D::<i64>::from_xywh(0, y, 800, 600)).len())
            })
        });

        // Page jumps: every call replaces the visible set.
        group.bench_function(format!("page_jump_n{}", n), |b| {
            let mut index = build(&items);
            let mut y = 0_i64;
            b.iter(|| {
                y = (y + 700) % (extent - 600);
                black_box(index.make_visible(Aabb2D::<i64>::from_xywh(0, y, 800, 600)).len())
            })
        });

        group.bench_function(format!("build_n{}", n), |b| {
            b.iter_batched(
                || items.clone(),
                |items| black_box(build(&items).len()),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scroll);
criterion_main!(benches);
