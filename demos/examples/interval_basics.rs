// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interval tree basics: stabbing and overlap queries in 1D and 2D.
//!
//! Run:
//! - `cargo run -p lookout_demos --example interval_basics`

use lookout_interval::{Aabb2D, Interval, IntervalTree, IntervalTree2D};

fn main() {
    // Meeting slots in minutes since midnight.
    let mut slots = IntervalTree::new();
    slots.insert(Interval::new(540, 600), "standup");
    slots.insert(Interval::new(570, 660), "design review");
    slots.insert(Interval::new(720, 780), "lunch");
    slots.insert(Interval::new(600, 615), "coffee");

    let at_ten: Vec<_> = slots.items_at(600).collect();
    println!("busy at 10:00: {at_ten:?}");

    let morning: Vec<_> = slots.items_within(480, 719).collect();
    println!("morning: {morning:?}");

    println!("tree:\n{}", slots.dump());

    let removed = slots.remove(Interval::new(570, 660));
    println!("cancelled {removed:?}, {} left", slots.len());

    // Two labels may share one rectangle.
    let mut labels = IntervalTree2D::new();
    labels.insert(Aabb2D::<i32>::from_xywh(0, 0, 40, 10), "title");
    labels.insert(Aabb2D::<i32>::from_xywh(0, 0, 40, 10), "title shadow");
    labels.insert(Aabb2D::<i32>::from_xywh(30, 5, 20, 20), "badge");

    let hits: Vec<_> = labels.items_at(35, 8).collect();
    println!("under (35, 8): {hits:?}");

    let window = Aabb2D::<i32>::new(45, 0, 60, 30);
    let mut seen = Vec::new();
    labels.visit_rect(window, |label| seen.push(*label));
    println!("in {window:?}: {seen:?}");
}
