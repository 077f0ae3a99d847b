// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bridging Kurbo's float rectangles to the integer index.

use kurbo::Rect;
use lookout_interval::Aabb2D;

use crate::diff::VisibleDiff;
use crate::index::VisibleIndex;
use crate::types::Bounded;

/// Integer box covering `rect`.
///
/// The rectangle is normalized first, then rounded outward, so every point of the
/// float rectangle lies inside the result. Coordinates beyond the `i64` range saturate.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Values are already integral after expand(); out-of-range floats saturate."
)]
pub fn aabb_from_rect(rect: Rect) -> Aabb2D<i64> {
    let r = rect.abs().expand();
    Aabb2D::new(r.x0 as i64, r.y0 as i64, r.x1 as i64, r.y1 as i64)
}

/// Float rectangle spanning `aabb`.
#[allow(
    clippy::cast_precision_loss,
    reason = "Screen coordinates stay far below 2^53."
)]
pub fn rect_from_aabb(aabb: Aabb2D<i64>) -> Rect {
    Rect::new(
        aabb.min_x as f64,
        aabb.min_y as f64,
        aabb.max_x as f64,
        aabb.max_y as f64,
    )
}

impl<P: Bounded<i64> + Copy + Ord> VisibleIndex<i64, P> {
    /// [`make_visible`](Self::make_visible) with a float viewport, see [`aabb_from_rect`].
    pub fn make_visible_rect(&mut self, viewport: Rect) -> VisibleDiff<P> {
        self.make_visible(aabb_from_rect(viewport))
    }

    /// [`items_within`](Self::items_within) with a float rectangle, see [`aabb_from_rect`].
    pub fn items_within_rect(&self, rect: Rect) -> impl Iterator<Item = &P> + '_ {
        self.items_within(aabb_from_rect(rect))
    }
}
