// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility changes returned by [`VisibleIndex::make_visible`](crate::VisibleIndex::make_visible).

use alloc::vec::Vec;

use lookout_interval::Aabb2D;

use crate::types::Bounded;

/// Items that entered and left the visible set in one viewport change.
///
/// Both lists are sorted by the item's `Ord` and never share an element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleDiff<P> {
    /// Items visible now that were not visible before.
    pub added: Vec<P>,
    /// Items visible before that are not visible now, or that were removed from the index.
    pub removed: Vec<P>,
}

impl<P> Default for VisibleDiff<P> {
    fn default() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
        }
    }
}

impl<P> VisibleDiff<P> {
    /// True if visibility did not change.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Total number of changed items.
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len()
    }

    /// Union of the bounds of every changed item, i.e. the region to repaint.
    /// Returns `None` if empty.
    ///
    /// Removed items report their current bounds, so this is only meaningful while their
    /// geometry is still the one they were indexed under.
    pub fn union<T: Copy + Ord>(&self) -> Option<Aabb2D<T>>
    where
        P: Bounded<T>,
    {
        let mut it = self.added.iter().chain(&self.removed).map(<P as Bounded<T>>::bounds);
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(&r)))
    }
}
