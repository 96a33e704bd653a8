//! Coplanar triangle intersection: when two triangles share a supporting
//! plane, the 3-D test degenerates into a 2-D one. We drop whichever axis
//! the shared normal is most aligned with (the projection onto that
//! axis loses the least information) and run the edge-crossing and
//! containment tests in the plane.
//!
//! This module never calls into [`super::sat`] — a coincident pair is
//! conclusively resolved by the tests below, not handed off.

use crate::linear::{axis, Point};
use crate::shape::Triangle;

pub(crate) type Pt2 = (f64, f64);

/// The axis to drop: whichever component of the normal has the largest
/// magnitude, since that's the axis the plane is "most perpendicular to"
/// and projecting it away preserves the most shape. Shared with
/// [`super::degenerate`]'s point/segment-vs-triangle tests, which reduce
/// to the same 2-D projection.
pub(crate) fn dominant_axis(t: &Triangle) -> usize {
    let n = t.normal();
    let (mut best_axis, mut best_mag) = (0usize, axis(n, 0).abs());
    for i in 1..3 {
        let mag = axis(n, i).abs();
        if mag > best_mag {
            best_mag = mag;
            best_axis = i;
        }
    }
    best_axis
}

pub(crate) fn project(p: Point, drop: usize) -> Pt2 {
    match drop {
        0 => (p.y, p.z),
        1 => (p.x, p.z),
        _ => (p.x, p.y),
    }
}

fn cross2(o: Pt2, a: Pt2, b: Pt2) -> f64 {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

fn on_segment(p: Pt2, a: Pt2, b: Pt2) -> bool {
    let min_x = a.0.min(b.0) - crate::linear::EPSILON;
    let max_x = a.0.max(b.0) + crate::linear::EPSILON;
    let min_y = a.1.min(b.1) - crate::linear::EPSILON;
    let max_y = a.1.max(b.1) + crate::linear::EPSILON;
    p.0 >= min_x && p.0 <= max_x && p.1 >= min_y && p.1 <= max_y
}

/// 2-D segment/segment intersection, including the collinear-overlap case.
pub(crate) fn segments_cross(a0: Pt2, a1: Pt2, b0: Pt2, b1: Pt2) -> bool {
    let d1 = cross2(b0, b1, a0);
    let d2 = cross2(b0, b1, a1);
    let d3 = cross2(a0, a1, b0);
    let d4 = cross2(a0, a1, b1);

    let eps = crate::linear::EPSILON;
    if ((d1 > eps && d2 < -eps) || (d1 < -eps && d2 > eps))
        && ((d3 > eps && d4 < -eps) || (d3 < -eps && d4 > eps))
    {
        return true;
    }

    if d1.abs() < eps && on_segment(a0, b0, b1) {
        return true;
    }
    if d2.abs() < eps && on_segment(a1, b0, b1) {
        return true;
    }
    if d3.abs() < eps && on_segment(b0, a0, a1) {
        return true;
    }
    if d4.abs() < eps && on_segment(b1, a0, a1) {
        return true;
    }
    false
}

/// 2-D point-in-triangle test via same-sign-of-cross-product, inclusive of
/// the boundary.
pub(crate) fn point_in_triangle(p: Pt2, a: Pt2, b: Pt2, c: Pt2) -> bool {
    let eps = crate::linear::EPSILON;
    let d1 = cross2(a, b, p);
    let d2 = cross2(b, c, p);
    let d3 = cross2(c, a, p);

    let has_neg = d1 < -eps || d2 < -eps || d3 < -eps;
    let has_pos = d1 > eps || d2 > eps || d3 > eps;
    !(has_neg && has_pos)
}

/// The coplanar intersection test. Assumes both triangles are
/// `TriangleKind::Normal` and share a supporting plane.
pub(crate) fn intersect(t1: &Triangle, t2: &Triangle) -> Result<bool, crate::error::GeometryError> {
    let drop = dominant_axis(t1);

    let a = [
        project(t1.p0, drop),
        project(t1.p1, drop),
        project(t1.p2, drop),
    ];
    let b = [
        project(t2.p0, drop),
        project(t2.p1, drop),
        project(t2.p2, drop),
    ];

    for i in 0..3 {
        for j in 0..3 {
            if segments_cross(a[i], a[(i + 1) % 3], b[j], b[(j + 1) % 3]) {
                return Ok(true);
            }
        }
    }

    if point_in_triangle(a[0], b[0], b[1], b[2]) {
        return Ok(true);
    }
    if point_in_triangle(b[0], a[0], a[1], a[2]) {
        return Ok(true);
    }

    Ok(false)
}
