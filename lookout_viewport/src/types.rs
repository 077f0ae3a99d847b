// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Bounded`] trait linking an item handle to the rectangle it occupies.

use lookout_interval::Aabb2D;

/// An item that knows its own bounding box.
///
/// [`VisibleIndex`](crate::VisibleIndex) stores handles by value and asks them for their
/// bounds on insert and on remove. The rectangle must not change while the handle is
/// stored; to move an item, remove it, update its geometry, and insert it again.
///
/// Bounds are inclusive on every edge, see [`Aabb2D`].
pub trait Bounded<T> {
    /// The item's bounding box in index coordinates.
    fn bounds(&self) -> Aabb2D<T>;
}

impl<T, B: Bounded<T> + ?Sized> Bounded<T> for &B {
    fn bounds(&self) -> Aabb2D<T> {
        (**self).bounds()
    }
}

impl<T: Copy> Bounded<T> for Aabb2D<T> {
    fn bounds(&self) -> Self {
        *self
    }
}

impl<T: Copy, I> Bounded<T> for (Aabb2D<T>, I) {
    fn bounds(&self) -> Aabb2D<T> {
        self.0
    }
}
