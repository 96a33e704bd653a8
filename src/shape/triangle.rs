//! The caller-facing `Triangle` type and its degeneracy classification.

use super::aabb::Aabb;
use super::segment::Segment;
use crate::error::GeometryError;
use crate::linear::{cross, is_null, length, points_approx_eq, Point, Vector};

/// The three shapes a `Triangle`'s vertices can actually describe. This is
/// a pure function of the three vertices — never cached, never a stored
/// discriminant a caller could desync from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleKind {
    /// The three vertices are affinely independent; the normal is
    /// non-zero and meaningful.
    Normal,
    /// The normal is zero but at least two vertices differ: the triangle
    /// has collapsed onto a line segment.
    Segment,
    /// All three vertices coincide within epsilon.
    Point,
}

/// A triangle: three vertices plus a caller-assigned, stable-within-a-run
/// identifier. May be degenerate (see [`TriangleKind`]) — this crate
/// never rejects a degenerate triangle, it classifies and handles it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub id: usize,
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl Triangle {
    pub fn new(id: usize, p0: Point, p1: Point, p2: Point) -> Self {
        Triangle { id, p0, p1, p2 }
    }

    /// The triangle's (unnormalised) face normal. Its zero-ness is what
    /// [`Triangle::kind`] dispatches on — it is deliberately never stored
    /// normalised, since normalising first would throw away the
    /// information that distinguishes Normal from degenerate triangles.
    pub fn normal(&self) -> Vector {
        cross(self.p1 - self.p0, self.p2 - self.p1)
    }

    pub fn kind(&self) -> TriangleKind {
        if !is_null(self.normal()) {
            TriangleKind::Normal
        } else if points_approx_eq(self.p0, self.p1) && points_approx_eq(self.p1, self.p2) {
            TriangleKind::Point
        } else {
            TriangleKind::Segment
        }
    }

    /// The axis-aligned bounding box of the three vertices.
    pub fn aabb(&self) -> Aabb {
        let mut b = Aabb::new(self.p0, self.p0);
        b.expand_point(self.p1);
        b.expand_point(self.p2);
        b
    }

    /// Degenerate-case reduction to a single point. Only meaningful (and
    /// only called) when `kind() == TriangleKind::Point`.
    pub(crate) fn as_point(&self) -> Point {
        self.p0
    }

    /// Degenerate-case reduction to a line segment, picking the two
    /// farthest-apart vertices as its endpoints. Only meaningful (and
    /// only called) when `kind() == TriangleKind::Segment`.
    pub(crate) fn as_segment(&self) -> Segment {
        let e01 = length(self.p1 - self.p0);
        let e12 = length(self.p2 - self.p1);
        let e02 = length(self.p2 - self.p0);

        // Whichever vertex sits strictly between the other two has its
        // opposite edge length equal to the sum of the two adjacent ones;
        // the farthest-apart pair is that opposite edge's endpoints.
        if (e01 + e12 - e02).abs() < crate::linear::EPSILON {
            Segment::new(self.p0, self.p2)
        } else if (e01 + e02 - e12).abs() < crate::linear::EPSILON {
            Segment::new(self.p1, self.p2)
        } else {
            Segment::new(self.p0, self.p1)
        }
    }

    /// Classify this triangle into the internal `Shape` sum type the
    /// kernel dispatches on. Exhaustive over [`TriangleKind`]; there is no
    /// path that reaches [`GeometryError::InvariantViolation`] from here,
    /// but the `Result` keeps the call sites honest about the one
    /// structurally-impossible case a less careful rewrite might need to
    /// guard against.
    pub(crate) fn classify(&self) -> Result<super::Shape, GeometryError> {
        Ok(match self.kind() {
            TriangleKind::Normal => super::Shape::Triangle(*self),
            TriangleKind::Segment => super::Shape::Segment(self.as_segment()),
            TriangleKind::Point => super::Shape::Point(self.as_point()),
        })
    }

    /// The full boolean triangle-triangle intersection test — the
    /// kernel's single entry point. Total over every combination of
    /// degeneracies on both sides.
    pub fn intersect(&self, other: &Triangle) -> Result<bool, GeometryError> {
        crate::kernel::intersect(self, other)
    }
}
