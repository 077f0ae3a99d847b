// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: closed intervals and inclusive 2D boxes.

/// Closed interval `[min, max]` on one axis.
///
/// The derived ordering is lexicographic on `(min, max)`, which is exactly the
/// key order used by [`IntervalTree`](crate::IntervalTree).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval<T> {
    /// Lower bound (inclusive).
    pub min: T,
    /// Upper bound (inclusive).
    pub max: T,
}

impl<T> Interval<T> {
    /// Create a new interval. Callers keep `min <= max`.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: Copy> Interval<T> {
    /// Degenerate interval covering the single value `x`.
    pub fn point(x: T) -> Self {
        Self { min: x, max: x }
    }
}

impl<T: Copy + Ord> Interval<T> {
    /// Whether `x` lies inside the interval, bounds included.
    pub fn contains(&self, x: T) -> bool {
        self.min <= x && x <= self.max
    }

    /// Whether the two intervals share at least one value. Touching bounds overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// True if the interval is inverted (`max < min`).
    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }
}

/// Axis-aligned bounding box in 2D with inclusive edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Aabb2D<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (top)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (bottom)
    pub max_y: T,
}

impl<T> Aabb2D<T> {
    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Copy> Aabb2D<T> {
    /// Horizontal extent `[min_x, max_x]`.
    pub fn x_interval(&self) -> Interval<T> {
        Interval::new(self.min_x, self.max_x)
    }

    /// Vertical extent `[min_y, max_y]`.
    pub fn y_interval(&self) -> Interval<T> {
        Interval::new(self.min_y, self.max_y)
    }
}

impl<T: Copy + Ord> Aabb2D<T> {
    /// Whether this AABB contains the point, edges included.
    pub fn contains_point(&self, x: T, y: T) -> bool {
        self.x_interval().contains(x) && self.y_interval().contains(y)
    }

    /// Whether the two boxes overlap. Shared edges and corners count.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x_interval().overlaps(&other.x_interval())
            && self.y_interval().overlaps(&other.y_interval())
    }

    /// Return true if the AABB is inverted on either axis.
    pub fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }

    /// Smallest box covering both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

impl Aabb2D<i32> {
    /// Create an AABB from origin and size in i32.
    ///
    /// The box covers `[x, x + w] × [y, y + h]`, so a zero-sized box still holds its origin.
    pub const fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x.saturating_add(w),
            max_y: y.saturating_add(h),
        }
    }
}

impl Aabb2D<i64> {
    /// Create an AABB from origin and size in i64.
    ///
    /// The box covers `[x, x + w] × [y, y + h]`, so a zero-sized box still holds its origin.
    pub const fn from_xywh(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x.saturating_add(w),
            max_y: y.saturating_add(h),
        }
    }
}
