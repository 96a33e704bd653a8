//! Shape primitives: AABB, Segment, and Triangle, plus the internal
//! `Shape` sum type the intersection kernel dispatches on.

pub mod aabb;
pub mod segment;
pub mod triangle;

pub use self::aabb::Aabb;
pub use self::segment::Segment;
pub use self::triangle::{Triangle, TriangleKind};

use crate::linear::Point;

/// The geometric entity a `Triangle` actually reduces to, computed by
/// [`Triangle::classify`]. Internal to the kernel: callers only ever see
/// `Triangle` values; this is how the kernel avoids ever treating a
/// Segment- or Point-kind triangle as if its normal were meaningful.
///
/// Representing this as a proper sum type (rather than a triangle with a
/// stored type tag) makes "triangle with an unrecognised discriminant"
/// structurally unrepresentable at every dispatch site that matches on it.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Point(Point),
    Segment(Segment),
    Triangle(Triangle),
}
