// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`VisibleIndex`]: a rectangle index that remembers what the last viewport showed.

use alloc::collections::BTreeSet;
use core::fmt::{self, Debug};

use lookout_interval::{Aabb2D, IntervalTree2D};

use crate::diff::VisibleDiff;
use crate::types::Bounded;

/// Spatial index of item handles plus the set of items visible in the current viewport.
///
/// Items are stored in an [`IntervalTree2D`] under their [`Bounded::bounds`]. Queries are
/// answered straight from the tree. [`make_visible`](Self::make_visible) additionally
/// compares the items under the new viewport with the ones recorded for the previous call
/// and reports the difference.
///
/// Inserting or removing items never touches the recorded visible set; the change shows
/// up in the diff of the next [`make_visible`](Self::make_visible).
pub struct VisibleIndex<T, P> {
    tree: IntervalTree2D<T, P>,
    viewport: Option<Aabb2D<T>>,
    visible: BTreeSet<P>,
}

impl<T, P> Default for VisibleIndex<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> VisibleIndex<T, P> {
    /// Create an empty index with no viewport.
    pub const fn new() -> Self {
        Self {
            tree: IntervalTree2D::new(),
            viewport: None,
            visible: BTreeSet::new(),
        }
    }

    /// True if no items are stored.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// The viewport passed to the most recent [`make_visible`](Self::make_visible).
    pub fn viewport(&self) -> Option<&Aabb2D<T>> {
        self.viewport.as_ref()
    }

    /// Items visible as of the most recent [`make_visible`](Self::make_visible), in order.
    pub fn visible(&self) -> impl Iterator<Item = &P> + '_ {
        self.visible.iter()
    }

    /// Drop all items together with the viewport and the visible set.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.viewport = None;
        self.visible.clear();
    }
}

impl<T: Copy + Ord, P: Bounded<T> + Copy + Ord> VisibleIndex<T, P> {
    /// Add `item` under its current bounds.
    ///
    /// Returns `false` if the item is already stored under those bounds, or if its bounds
    /// are empty (inverted on an axis), in which case it is not indexed at all.
    pub fn insert(&mut self, item: P) -> bool {
        let bounds = item.bounds();
        if bounds.is_empty() {
            return false;
        }
        self.tree.insert(bounds, item)
    }

    /// Remove `item`, looking it up under its current bounds.
    ///
    /// Returns whether it was stored. A removed item that was visible stays in the
    /// visible set until the next [`make_visible`](Self::make_visible) reports it removed.
    pub fn remove(&mut self, item: &P) -> bool {
        let bounds = item.bounds();
        if bounds.is_empty() {
            return false;
        }
        self.tree.remove(bounds, item)
    }

    /// Whether `item` is stored under its current bounds.
    pub fn contains(&self, item: &P) -> bool {
        self.tree.contains(item.bounds(), item)
    }

    /// Whether `item` was visible as of the most recent [`make_visible`](Self::make_visible).
    pub fn is_visible(&self, item: &P) -> bool {
        self.visible.contains(item)
    }

    /// All stored items, ordered by bounds then insertion.
    pub fn items(&self) -> impl Iterator<Item = &P> + '_ {
        self.tree.items()
    }

    /// Items whose bounds contain the point, edges included.
    pub fn items_at(&self, x: T, y: T) -> impl Iterator<Item = &P> + '_ {
        self.tree.items_at(x, y)
    }

    /// Items whose bounds overlap `rect`, shared edges included.
    pub fn items_within(&self, rect: Aabb2D<T>) -> impl Iterator<Item = &P> + '_ {
        self.tree.items_within(rect)
    }

    /// Move the viewport to `viewport` and report which items appeared and disappeared.
    ///
    /// An empty (inverted) viewport shows nothing, so it hides everything that was visible.
    /// Calling this twice with the same viewport and no edits in between yields an empty
    /// diff the second time.
    pub fn make_visible(&mut self, viewport: Aabb2D<T>) -> VisibleDiff<P> {
        let now: BTreeSet<P> = if viewport.is_empty() {
            BTreeSet::new()
        } else {
            self.tree.items_within(viewport).copied().collect()
        };
        let diff = VisibleDiff {
            added: now.difference(&self.visible).copied().collect(),
            removed: self.visible.difference(&now).copied().collect(),
        };
        self.visible = now;
        self.viewport = Some(viewport);
        diff
    }
}

impl<T: Debug, P> Debug for VisibleIndex<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibleIndex")
            .field("len", &self.tree.len())
            .field("viewport", &self.viewport)
            .field("visible", &self.visible.len())
            .finish_non_exhaustive()
    }
}
