// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lookout_viewport --heading-base-level=0

//! Lookout Viewport: track which items a scrolling viewport shows.
//!
//! Lookout Viewport is a building block for virtualized views such as map layers, long
//! lists, and canvases: only the items under the viewport get materialized, and when the
//! viewport moves you want to know exactly which items to create and which to drop.
//!
//! - [`VisibleIndex`] stores item handles in a [`lookout_interval::IntervalTree2D`] keyed
//!   by each item's [`Bounded::bounds`].
//! - [`VisibleIndex::make_visible`] queries the new viewport and returns a
//!   [`VisibleDiff`]: the items that became visible and the ones that stopped being
//!   visible since the previous call.
//! - Point and rectangle queries ([`VisibleIndex::items_at`], [`VisibleIndex::items_within`])
//!   are answered without touching the visible set.
//!
//! Coordinates are integers with inclusive edges. Float rectangles from Kurbo can be
//! mapped with [`aabb_from_rect`], which rounds outward, or passed straight to
//! [`VisibleIndex::make_visible_rect`].
//!
//! ## Handles, not items
//!
//! The index stores handles by value (`P: Copy + Ord`), typically small ids or
//! `(bounds, id)` tuples. It never owns the items themselves. A handle must report the
//! same bounds for as long as it is stored; to move an item, remove it, change it, and
//! insert it again. Handles with empty bounds are not indexed.
//!
//! ## Edits and the visible set
//!
//! The visible set changes only in [`VisibleIndex::make_visible`]. Inserting an item under
//! the current viewport does not make it visible until the next call, and removing a
//! visible item reports it in the next diff's `removed` list. Calling `make_visible` again
//! with the same viewport is therefore how a caller flushes pending edits.
//!
//! ## Example
//!
//! ```
//! use lookout_interval::Aabb2D;
//! use lookout_viewport::{Bounded, VisibleIndex};
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
//! struct Row(i64);
//!
//! impl Bounded<i64> for Row {
//!     fn bounds(&self) -> Aabb2D<i64> {
//!         Aabb2D::<i64>::from_xywh(0, self.0 * 20, 300, 19)
//!     }
//! }
//!
//! let mut rows: VisibleIndex<i64, Row> = VisibleIndex::new();
//! for i in 0..100 {
//!     rows.insert(Row(i));
//! }
//!
//! // First screen: rows 0 through 4.
//! let diff = rows.make_visible(Aabb2D::<i64>::from_xywh(0, 0, 300, 99));
//! assert_eq!(diff.added, [Row(0), Row(1), Row(2), Row(3), Row(4)]);
//!
//! // Scroll down by one row.
//! let diff = rows.make_visible(Aabb2D::<i64>::from_xywh(0, 20, 300, 99));
//! assert_eq!(diff.added, [Row(5)]);
//! assert_eq!(diff.removed, [Row(0)]);
//! ```
//!
//! Kurbo is used only for the float adapter. Enable either the `std` (default) or the
//! `libm` feature; they are forwarded to Kurbo.

#![no_std]

extern crate alloc;

mod diff;
mod index;
mod rect;
mod types;

pub use diff::VisibleDiff;
pub use index::VisibleIndex;
pub use rect::{aabb_from_rect, rect_from_aabb};
pub use types::Bounded;
