//! Separating Axis Theorem test for two triangles whose planes are known
//! to intersect transversally (see [`super::plane`]). Eleven candidate
//! axes: each triangle's face normal, plus the nine cross products of
//! one triangle's edge with the other's.

use crate::linear::{cross, dot, length, Vector};
use crate::shape::Triangle;
use cgmath::EuclideanSpace;

/// Project a triangle's three vertices onto `axis` (assumed non-zero) and
/// return the resulting `[min, max]` interval.
fn project(t: &Triangle, axis: Vector) -> (f64, f64) {
    let a = dot(t.p0.to_vec(), axis);
    let b = dot(t.p1.to_vec(), axis);
    let c = dot(t.p2.to_vec(), axis);
    (a.min(b).min(c), a.max(b).max(c))
}

fn intervals_overlap(a: (f64, f64), b: (f64, f64)) -> bool {
    a.0 <= b.1 + crate::linear::EPSILON && b.0 <= a.1 + crate::linear::EPSILON
}

/// Run SAT over all eleven candidate axes. Returns `false` as soon as a
/// separating axis is found; `true` if none of the eleven separates.
pub(crate) fn intersect(t1: &Triangle, t2: &Triangle) -> bool {
    let edges1 = [t1.p1 - t1.p0, t1.p2 - t1.p1, t1.p0 - t1.p2];
    let edges2 = [t2.p1 - t2.p0, t2.p2 - t2.p1, t2.p0 - t2.p2];

    let mut axes = Vec::with_capacity(11);
    axes.push(t1.normal());
    axes.push(t2.normal());
    for e1 in &edges1 {
        for e2 in &edges2 {
            axes.push(cross(*e1, *e2));
        }
    }

    for axis in axes {
        // A cross product of (near-)parallel edges is (near-)zero and
        // carries no separating information; skip it rather than divide
        // by a direction with no well-defined sense.
        if length(axis) < crate::linear::EPSILON {
            continue;
        }
        if !intervals_overlap(project(t1, axis), project(t2, axis)) {
            return false;
        }
    }
    true
}
