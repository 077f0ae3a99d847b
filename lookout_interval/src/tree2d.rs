// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two nested interval trees indexing rectangles: x-intervals outside, y-intervals inside.

use alloc::vec::Vec;
use core::fmt::{self, Debug};

use crate::tree::IntervalTree;
use crate::types::{Aabb2D, Interval};

type Column<T, P> = IntervalTree<T, Vec<P>>;

/// Rectangle index built from two levels of [`IntervalTree`].
///
/// The outer tree is keyed by each rectangle's exact x-interval; its payload is an
/// inner tree keyed by the exact y-interval, whose payload is the list of items
/// sharing that exact rectangle. Lookup during insertion is by exact key, never by
/// overlap, so identical rectangles share one list and distinct rectangles never
/// merge. Empty lists and inner trees are dropped as soon as they empty.
///
/// An item is stored at most once per rectangle (compared with `PartialEq`). The same
/// item may be stored under several different rectangles.
///
/// # Example
///
/// ```rust
/// use lookout_interval::{Aabb2D, IntervalTree2D};
///
/// let mut tree = IntervalTree2D::new();
/// tree.insert(Aabb2D::<i64>::from_xywh(0, 0, 10, 10), 1_u32);
/// tree.insert(Aabb2D::<i64>::from_xywh(5, 5, 10, 10), 2);
///
/// let hits: Vec<_> = tree.items_at(6, 6).copied().collect();
/// assert_eq!(hits, [1, 2]);
///
/// let window = Aabb2D::new(11, 11, 20, 20);
/// assert_eq!(tree.items_within(window).copied().collect::<Vec<_>>(), [2]);
/// ```
#[derive(Clone)]
pub struct IntervalTree2D<T, P> {
    columns: IntervalTree<T, Column<T, P>>,
    len: usize,
}

impl<T, P> Default for IntervalTree2D<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> IntervalTree2D<T, P> {
    /// Create an empty index.
    pub const fn new() -> Self {
        Self {
            columns: IntervalTree::new(),
            len: 0,
        }
    }

    /// Number of stored `(rectangle, item)` pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.columns.clear();
        self.len = 0;
    }
}

impl<T: Copy + Ord, P: PartialEq> IntervalTree2D<T, P> {
    /// Store `item` under `rect`.
    ///
    /// Returns `false` if an equal item is already stored under this exact rectangle.
    pub fn insert(&mut self, rect: Aabb2D<T>, item: P) -> bool {
        let column = self
            .columns
            .get_or_insert_with(rect.x_interval(), IntervalTree::new);
        let items = column.get_or_insert_with(rect.y_interval(), Vec::new);
        if items.contains(&item) {
            return false;
        }
        items.push(item);
        self.len += 1;
        true
    }

    /// Remove `item` from under `rect`, returning whether it was present.
    ///
    /// Only the exact rectangle the item was inserted with finds it again.
    pub fn remove(&mut self, rect: Aabb2D<T>, item: &P) -> bool {
        let (x, y) = (rect.x_interval(), rect.y_interval());
        let Some(column) = self.columns.find_mut(x) else {
            return false;
        };
        let Some(items) = column.find_mut(y) else {
            return false;
        };
        let Some(pos) = items.iter().position(|p| p == item) else {
            return false;
        };
        items.remove(pos);
        if items.is_empty() {
            column.remove(y);
        }
        if column.is_empty() {
            self.columns.remove(x);
        }
        self.len -= 1;
        true
    }

    /// Whether `item` is stored under exactly `rect`.
    pub fn contains(&self, rect: Aabb2D<T>, item: &P) -> bool {
        self.columns
            .find(rect.x_interval())
            .and_then(|column| column.find(rect.y_interval()))
            .is_some_and(|items| items.contains(item))
    }
}

impl<T: Copy + Ord, P> IntervalTree2D<T, P> {
    /// Every stored item, ordered by x-interval, then y-interval, then insertion.
    pub fn items(&self) -> impl Iterator<Item = &P> + '_ {
        self.columns
            .items()
            .flat_map(|column| column.items())
            .flat_map(|items| items.iter())
    }

    /// Every `(rectangle, item)` pair, in the same order as [`items`](Self::items).
    pub fn iter(&self) -> impl Iterator<Item = (Aabb2D<T>, &P)> + '_ {
        self.columns.iter().flat_map(|(x, column)| {
            column.iter().flat_map(move |(y, items)| {
                let rect = Aabb2D::new(x.min, y.min, x.max, y.max);
                items.iter().map(move |p| (rect, p))
            })
        })
    }

    /// Items whose rectangle contains the point, edges included.
    pub fn items_at(&self, x: T, y: T) -> impl Iterator<Item = &P> + '_ {
        self.columns
            .entries_at(x)
            .flat_map(move |(_, column)| column.entries_at(y))
            .flat_map(|(_, items)| items.iter())
    }

    /// Items whose rectangle overlaps `viewport`, shared edges included.
    pub fn items_within(&self, viewport: Aabb2D<T>) -> impl Iterator<Item = &P> + '_ {
        let Interval { min: y1, max: y2 } = viewport.y_interval();
        self.columns
            .entries_within(viewport.min_x, viewport.max_x)
            .flat_map(move |(_, column)| column.entries_within(y1, y2))
            .flat_map(|(_, items)| items.iter())
    }

    /// Call `op` on every item whose rectangle overlaps `viewport`.
    pub fn visit_rect<F: FnMut(&P)>(&self, viewport: Aabb2D<T>, mut op: F) {
        for item in self.items_within(viewport) {
            op(item);
        }
    }

    /// Number of distinct rectangles currently stored.
    pub fn rect_count(&self) -> usize {
        self.columns.items().map(IntervalTree::len).sum()
    }
}

impl<T: Debug, P> Debug for IntervalTree2D<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalTree2D")
            .field("len", &self.len)
            .field("columns", &self.columns.len())
            .finish_non_exhaustive()
    }
}
