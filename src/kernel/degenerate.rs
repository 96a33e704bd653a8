//! Intersection tests for every pair involving at least one degenerate
//! (Point- or Segment-kind) triangle. Each routine is total over its
//! inputs — there is no "shouldn't happen" case here, since a caller is
//! free to feed in three coincident vertices or three collinear ones and
//! the kernel has to answer regardless.

use super::coplanar;
use crate::error::GeometryError;
use crate::linear::{checked_div, cross, dot, is_null, points_approx_eq};
use crate::shape::segment::{clamp01_overlap, project_param};
use crate::shape::{Segment, Triangle};

/// Two points "intersect" when they coincide within epsilon.
pub(crate) fn point_vs_point(p: crate::linear::Point, q: crate::linear::Point) -> bool {
    points_approx_eq(p, q)
}

/// A point intersects a segment when it lies on it.
pub(crate) fn point_vs_segment(p: crate::linear::Point, s: &Segment) -> bool {
    s.contains_point(p)
}

/// Segment/segment intersection in full 3-D: collinear overlap, coplanar
/// crossing, or (for skew lines) never.
pub(crate) fn segment_vs_segment(a: &Segment, b: &Segment) -> Result<bool, GeometryError> {
    let d1 = a.direction();
    let d2 = b.direction();
    let qp = b.p0 - a.p0;

    if is_null(cross(d1, d2)) {
        // Parallel directions: only possibly intersecting if they lie on
        // the very same line.
        if !is_null(cross(qp, d1)) {
            return Ok(false);
        }
        let t0 = project_param(qp, d1);
        let t1 = project_param(b.p1 - a.p0, d1);
        return Ok(clamp01_overlap(t0, t1));
    }

    let rxs = cross(d1, d2);
    if dot(qp, rxs).abs() > crate::linear::EPSILON {
        // Not coplanar: skew lines, no possible intersection.
        return Ok(false);
    }

    let denom = dot(rxs, rxs);
    let t = dot(cross(qp, d2), rxs) / denom;
    let u = dot(cross(qp, d1), rxs) / denom;

    let eps = crate::linear::EPSILON;
    Ok(t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps)
}

/// Whether `p` lies on the triangle `t` (which must be `TriangleKind::Normal`),
/// including its boundary: first that it lies in `t`'s plane, then that its
/// 2-D projection falls inside the 2-D projection of `t`.
pub(crate) fn point_vs_triangle(
    p: crate::linear::Point,
    t: &Triangle,
) -> Result<bool, GeometryError> {
    let n = t.normal();
    let n_unit = checked_div(n, crate::linear::length(n))?;
    if dot(n_unit, p - t.p0).abs() > crate::linear::EPSILON {
        return Ok(false);
    }

    let drop = coplanar::dominant_axis(t);
    let pp = coplanar::project(p, drop);
    let a = coplanar::project(t.p0, drop);
    let b = coplanar::project(t.p1, drop);
    let c = coplanar::project(t.p2, drop);
    Ok(coplanar::point_in_triangle(pp, a, b, c))
}

/// Segment/triangle intersection, dispatching on whether the segment's
/// line is parallel to the triangle's plane.
pub(crate) fn segment_vs_triangle(s: &Segment, t: &Triangle) -> Result<bool, GeometryError> {
    let n = t.normal();
    let dir = s.direction();
    let denom = dot(n, dir);

    if denom.abs() <= crate::linear::EPSILON {
        // Segment runs parallel to the plane. It can only intersect the
        // triangle if it lies within the plane itself.
        if dot(n, s.p0 - t.p0).abs() >= crate::linear::EPSILON {
            return Ok(false);
        }
        return segment_in_plane_vs_triangle(s, t);
    }

    let param = dot(n, t.p0 - s.p0) / denom;
    let eps = crate::linear::EPSILON;
    if param < -eps || param > 1.0 + eps {
        return Ok(false);
    }
    let hit = s.p0 + dir * param;
    point_vs_triangle(hit, t)
}

/// The in-plane branch of [`segment_vs_triangle`]: both already confirmed
/// coplanar, so this reduces to the same 2-D edge-crossing and
/// containment tests the coplanar triangle/triangle path uses.
fn segment_in_plane_vs_triangle(s: &Segment, t: &Triangle) -> Result<bool, GeometryError> {
    let drop = coplanar::dominant_axis(t);
    let s0 = coplanar::project(s.p0, drop);
    let s1 = coplanar::project(s.p1, drop);
    let a = coplanar::project(t.p0, drop);
    let b = coplanar::project(t.p1, drop);
    let c = coplanar::project(t.p2, drop);

    if coplanar::segments_cross(s0, s1, a, b)
        || coplanar::segments_cross(s0, s1, b, c)
        || coplanar::segments_cross(s0, s1, c, a)
    {
        return Ok(true);
    }
    if coplanar::point_in_triangle(s0, a, b, c) || coplanar::point_in_triangle(s1, a, b, c) {
        return Ok(true);
    }
    Ok(false)
}
