//! The intersection kernel: a single total boolean predicate,
//! `intersect(t1, t2)`, over every combination of {Point, Segment,
//! Triangle} on both sides.
//!
//! The entry point classifies each triangle into a [`crate::shape::Shape`]
//! and dispatches. Non-degenerate/non-degenerate pairs go through plane
//! classification, SAT, and the coplanar 2-D reduction (§4.1.1–4.1.3 of
//! SPEC_FULL.md); everything else goes through the degenerate routines
//! (§4.1.4), each total over its pair of shapes.

pub(crate) mod coplanar;
pub(crate) mod degenerate;
pub(crate) mod plane;
pub(crate) mod sat;

use crate::error::GeometryError;
use crate::shape::{Shape, Triangle};

/// The kernel's single public entry point. Total over any pair of
/// `Triangle` values, including every combination of degeneracy.
pub fn intersect(t1: &Triangle, t2: &Triangle) -> Result<bool, GeometryError> {
    match (t1.classify()?, t2.classify()?) {
        (Shape::Triangle(a), Shape::Triangle(b)) => normal_normal(&a, &b),
        (Shape::Point(p), Shape::Point(q)) => Ok(degenerate::point_vs_point(p, q)),
        (Shape::Point(p), Shape::Segment(s)) | (Shape::Segment(s), Shape::Point(p)) => {
            Ok(degenerate::point_vs_segment(p, &s))
        }
        (Shape::Segment(a), Shape::Segment(b)) => degenerate::segment_vs_segment(&a, &b),
        (Shape::Point(p), Shape::Triangle(t)) | (Shape::Triangle(t), Shape::Point(p)) => {
            degenerate::point_vs_triangle(p, &t)
        }
        (Shape::Segment(s), Shape::Triangle(t)) | (Shape::Triangle(t), Shape::Segment(s)) => {
            degenerate::segment_vs_triangle(&s, &t)
        }
    }
}

/// The Normal/Normal path: classify the relationship between the two
/// planes, then dispatch to SAT (non-coplanar) or the 2-D coplanar
/// reduction. Never falls through from the coplanar branch into SAT —
/// SAT is only defined once the planes are known to intersect transversally.
fn normal_normal(t1: &Triangle, t2: &Triangle) -> Result<bool, GeometryError> {
    match plane::relationship(t1, t2) {
        plane::PlaneRelationship::Parallel => Ok(false),
        plane::PlaneRelationship::Coincide => coplanar::intersect(t1, t2),
        plane::PlaneRelationship::Intersect => Ok(sat::intersect(t1, t2)),
    }
}
