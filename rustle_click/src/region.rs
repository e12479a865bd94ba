// Copyright 2026 the Rustle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-region boundary contract between gestures and their owning component.

use core::cell::Cell;
use kurbo::{Point, Rect};

/// The owning component's hit-region query.
///
/// A gesture re-evaluates this on every phase it cares about rather than
/// caching bounds at arm time, so implementations should answer with the
/// component's *current* bounds.
///
/// Bounds are inclusive: a point on the region's edge counts as inside.
pub trait HitRegion {
    /// Returns `true` iff `point` falls within the region's current bounds.
    fn contains_point(&self, point: Point) -> bool;
}

/// Fixed rectangular bounds, edges inclusive.
///
/// Note this differs from [`Rect::contains`], which treats the maximum edges
/// as exclusive.
impl HitRegion for Rect {
    fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x0 && point.x <= self.x1 && point.y >= self.y0 && point.y <= self.y1
    }
}

/// Rectangular bounds that may be replaced between phases (e.g. on resize);
/// each query reads the current value.
impl HitRegion for Cell<Rect> {
    fn contains_point(&self, point: Point) -> bool {
        self.get().contains_point(point)
    }
}
