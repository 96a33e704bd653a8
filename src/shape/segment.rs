//! Line segments, used as a degenerate triangle form.

use crate::linear::{dot, length, Point, Vector, EPSILON};

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p0: Point,
    pub p1: Point,
}

impl Segment {
    pub fn new(p0: Point, p1: Point) -> Self {
        Segment { p0, p1 }
    }

    pub fn direction(&self) -> Vector {
        self.p1 - self.p0
    }

    pub fn length(&self) -> f64 {
        length(self.direction())
    }

    /// A segment collapses to a point when its endpoints are within
    /// epsilon of coinciding.
    pub fn is_degenerate(&self) -> bool {
        self.length() < EPSILON
    }

    /// Whether `p` lies on this segment (including the endpoints), using
    /// the triangle-inequality equality test: `p` is on the segment iff
    /// the sum of its distances to the two endpoints equals the
    /// segment's own length.
    pub fn contains_point(&self, p: Point) -> bool {
        let lhs = length(p - self.p0) + length(p - self.p1);
        (lhs - self.length()).abs() < EPSILON
    }
}

#[inline]
pub(crate) fn clamp01_overlap(t0: f64, t1: f64) -> bool {
    let (lo, hi) = if t0 < t1 { (t0, t1) } else { (t1, t0) };
    lo.max(0.0) <= hi.min(1.0) + EPSILON
}

// Used by the segment/segment kernel to decide whether a diff vector and a
// direction vector are "the same line" in the degenerate collinear branch.
#[inline]
pub(crate) fn project_param(point_minus_origin: Vector, direction: Vector) -> f64 {
    dot(point_minus_origin, direction) / dot(direction, direction)
}
