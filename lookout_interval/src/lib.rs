// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lookout_interval --heading-base-level=0

//! Lookout Interval: balanced interval trees for 1D and 2D range queries.
//!
//! - [`IntervalTree`] is a self-balancing (AA-tree) ordered map from closed
//!   [`Interval`]s to payloads, augmented with the largest upper bound of each subtree so
//!   stabbing and overlap queries skip whole branches.
//! - [`IntervalTree2D`] nests two of them to index rectangles ([`Aabb2D`]): the outer tree
//!   is keyed by x-interval and each payload is a tree keyed by y-interval.
//!
//! Everything is generic over an ordered `Copy` scalar, so integer pixel coordinates work
//! directly and the crate does not depend on any geometry library. All bounds are
//! inclusive: a point on an edge hits, and rectangles that share an edge overlap.
//!
//! Entries iterate in key order, `(min, max)` lexicographically. Queries produce lazy
//! iterators and stop descending as soon as no further key can reach the query.
//!
//! # Example
//!
//! ```rust
//! use lookout_interval::{Interval, IntervalTree};
//!
//! let mut tree = IntervalTree::new();
//! tree.insert(Interval::new(1, 9), 'a');
//! tree.insert(Interval::new(3, 7), 'b');
//! tree.insert(Interval::new(8, 12), 'c');
//!
//! // Stabbing query: every interval containing 8.
//! let hits: Vec<_> = tree.items_at(8).copied().collect();
//! assert_eq!(hits, ['a', 'c']);
//!
//! // Overlap query, inclusive on both ends.
//! let hits: Vec<_> = tree.items_within(10, 20).copied().collect();
//! assert_eq!(hits, ['c']);
//!
//! assert_eq!(tree.remove(Interval::new(1, 9)), Some('a'));
//! assert_eq!(tree.items().copied().collect::<Vec<_>>(), ['b', 'c']);
//! ```
//!
//! Keys are unique: inserting an interval that is already present leaves the first
//! payload in place and returns `false`. Use [`IntervalTree::get_or_insert_with`] to
//! accumulate several values under one key.

#![no_std]

extern crate alloc;

pub mod tree;
pub mod tree2d;
pub mod types;

#[cfg(test)]
mod test_support;

pub use tree::{Entries, IntervalTree, TreeDump};
pub use tree2d::IntervalTree2D;
pub use types::{Aabb2D, Interval};
