// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Lookout Interval: insert, query, remove, and dump the tree.

use lookout_interval::{Interval, IntervalTree};

fn main() {
    let mut tree: IntervalTree<i64, char> = [
        (Interval::new(1, 4), 'a'),
        (Interval::new(6, 9), 'b'),
        (Interval::new(7, 11), 'c'),
        (Interval::new(9, 10), 'd'),
        (Interval::new(16, 24), 'e'),
    ]
    .into_iter()
    .collect();

    // Point query
    let hits: Vec<_> = tree.items_at(8).collect();
    println!("hits at 8: {:?}", hits);

    // Range query, bounds inclusive
    let hits: Vec<_> = tree.entries_within(5, 9).collect();
    println!("overlapping [5, 9]: {:?}", hits);

    let removed = tree.remove(Interval::new(7, 11));
    println!("removed {:?}\n{}", removed, tree.dump());
}
