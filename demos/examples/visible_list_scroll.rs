// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Virtualized list: materialize only rows entering the viewport and drop the ones leaving.
//!
//! Run:
//! - `cargo run -p lookout_demos --example visible_list_scroll`

use kurbo::Rect;
use lookout_interval::Aabb2D;
use lookout_viewport::{Bounded, VisibleIndex};

const ROW_H: i64 = 20;
const WIDTH: f64 = 200.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Row(u32);

impl Bounded<i64> for Row {
    fn bounds(&self) -> Aabb2D<i64> {
        // Rows are ROW_H tall with a one-pixel gap so neighbours do not touch.
        Aabb2D::<i64>::from_xywh(0, i64::from(self.0) * ROW_H, 200, ROW_H - 1)
    }
}

fn main() {
    let mut list: VisibleIndex<i64, Row> = VisibleIndex::new();
    for i in 0..1000 {
        list.insert(Row(i));
    }

    // Fractional scroll offsets, as a scroll view would report them.
    for scroll in [0.0, 30.5, 45.0, 200.0, 600.25, 600.25] {
        let viewport = Rect::new(0.0, scroll, WIDTH, scroll + 100.0);
        let diff = list.make_visible_rect(viewport);
        let shown: Vec<u32> = list.visible().map(|r| r.0).collect();
        println!(
            "scroll={scroll:.2} +{:?} -{:?} -> {:?}",
            diff.added.iter().map(|r| r.0).collect::<Vec<_>>(),
            diff.removed.iter().map(|r| r.0).collect::<Vec<_>>(),
            shown,
        );
        if let Some(damage) = diff.union::<i64>() {
            println!("  repaint {damage:?}");
        }
    }

    // Deleting a visible row shows up on the next refresh of the same viewport.
    let _ = list.remove(&Row(31));
    if let Some(viewport) = list.viewport().copied() {
        let diff = list.make_visible(viewport);
        println!("after delete: removed {:?}", diff.removed);
    }
}
