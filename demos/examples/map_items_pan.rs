// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map markers on a 2D canvas: pan the viewport and react to markers entering and leaving.
//!
//! Run:
//! - `cargo run -p lookout_demos --example map_items_pan`

use lookout_interval::Aabb2D;
use lookout_viewport::VisibleIndex;

type Marker = (Aabb2D<i64>, &'static str);

fn marker(name: &'static str, x: i64, y: i64) -> Marker {
    (Aabb2D::<i64>::from_xywh(x, y, 16, 16), name)
}

fn main() {
    let mut map: VisibleIndex<i64, Marker> = VisibleIndex::new();
    for m in [
        marker("harbour", 16, 16),
        marker("lighthouse", 272, 16),
        marker("market", 16, 272),
        marker("station", 272, 272),
        marker("museum", 248, 248),
    ] {
        map.insert(m);
    }

    let mut x = 0;
    for step in 0..4 {
        let viewport = Aabb2D::<i64>::from_xywh(x, 0, 200, 320);
        let diff = map.make_visible(viewport);
        let names = |v: &[Marker]| v.iter().map(|m| m.1).collect::<Vec<_>>();
        println!(
            "step {step}: viewport x={x} show {:?} hide {:?}",
            names(&diff.added),
            names(&diff.removed)
        );
        x += 96;
    }

    // A marker dropped under the viewport appears on the next refresh.
    let cafe = marker("cafe", 300, 100);
    map.insert(cafe);
    if let Some(viewport) = map.viewport().copied() {
        let diff = map.make_visible(viewport);
        println!("refresh: show {:?}", diff.added);
    }

    let under: Vec<_> = map.items_at(280, 280).map(|m| m.1).collect();
    println!("under cursor: {under:?}");
    println!("{map:?}");
}
