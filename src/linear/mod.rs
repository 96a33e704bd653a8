//! Point, Vector, and the scalar operations the rest of the crate builds on.
//!
//! `Point` and `Vector` are both ordered triples of `f64`, but kept
//! semantically distinct the way the teacher's own `space` module keeps
//! `Point`/`Vector` distinct aliases over the same backing type: a `Point`
//! is a location, a `Vector` is a displacement, and only the combinations
//! that make geometric sense (`Point - Point -> Vector`, `Point + Vector ->
//! Point`) type-check.

use crate::error::GeometryError;
use cgmath::{EuclideanSpace, InnerSpace, Zero};

/// A location in 3-space.
pub type Point = cgmath::Point3<f64>;

/// A displacement in 3-space.
pub type Vector = cgmath::Vector3<f64>;

/// The process-wide numerical tolerance. Every "approximately equal" or
/// "approximately zero" decision in this crate is relative to this value.
/// Not adaptive: the same constant governs coordinates of any magnitude.
pub const EPSILON: f64 = 1e-12;

/// Component access by axis index (0 = x, 1 = y, 2 = z). Out-of-range is a
/// programming error, not a recoverable condition, so this panics like the
/// teacher's own `debug_assert!`-guarded indexing does.
#[inline]
pub fn axis(v: Vector, i: usize) -> f64 {
    match i {
        0 => v.x,
        1 => v.y,
        2 => v.z,
        _ => panic!("axis index {i} out of range for a 3-vector"),
    }
}

/// Component access on a point by axis index. See [`axis`].
#[inline]
pub fn point_axis(p: Point, i: usize) -> f64 {
    match i {
        0 => p.x,
        1 => p.y,
        2 => p.z,
        _ => panic!("axis index {i} out of range for a 3-point"),
    }
}

#[inline]
pub fn dot(a: Vector, b: Vector) -> f64 {
    a.dot(b)
}

#[inline]
pub fn cross(a: Vector, b: Vector) -> Vector {
    a.cross(b)
}

#[inline]
pub fn length2(v: Vector) -> f64 {
    v.magnitude2()
}

#[inline]
pub fn length(v: Vector) -> f64 {
    length2(v).sqrt()
}

/// Divide a vector by a scalar, rejecting divisors too close to zero to be
/// numerically meaningful. Kernel call sites only reach this after proving
/// the divisor is bounded away from zero on the branch taken, so this path
/// is a defensive boundary rather than a normal part of the control flow.
#[inline]
pub fn checked_div(v: Vector, s: f64) -> Result<Vector, GeometryError> {
    if s.abs() <= EPSILON {
        Err(GeometryError::DivisionByZero)
    } else {
        Ok(v / s)
    }
}

/// Normalise a vector. A zero (or near-zero) vector normalises to the zero
/// vector rather than failing — there is no well-defined direction for it,
/// and forcing an error here would turn a geometrically sensible input
/// (a degenerate triangle's zero normal) into a spurious failure.
#[inline]
pub fn normalized(v: Vector) -> Vector {
    let len = length(v);
    if len <= EPSILON {
        Vector::zero()
    } else {
        v / len
    }
}

/// Two directions are collinear when their cross product is within
/// epsilon of the zero vector.
#[inline]
pub fn is_collinear(a: Vector, b: Vector) -> bool {
    length(cross(a, b)) < EPSILON
}

/// All three components are within epsilon of zero.
#[inline]
pub fn is_null(v: Vector) -> bool {
    v.x.abs() < EPSILON && v.y.abs() < EPSILON && v.z.abs() < EPSILON
}

#[inline]
pub fn vectors_approx_eq(a: Vector, b: Vector) -> bool {
    is_null(a - b)
}

#[inline]
pub fn points_approx_eq(a: Point, b: Point) -> bool {
    vectors_approx_eq(a.to_vec(), b.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::vec3;

    #[test]
    fn cross_is_anticommutative() {
        let u = vec3(1.0, 2.0, 3.0);
        let v = vec3(-4.0, 0.5, 7.0);
        assert!(vectors_approx_eq(cross(u, v), -cross(v, u)));
    }

    #[test]
    fn cross_is_orthogonal_to_both_inputs() {
        let u = vec3(1.0, 2.0, 3.0);
        let v = vec3(-4.0, 0.5, 7.0);
        let n = cross(u, v);
        assert!(dot(n, u).abs() < 1e-9);
        assert!(dot(n, v).abs() < 1e-9);
    }

    #[test]
    fn normalizing_zero_vector_yields_zero() {
        assert_eq!(normalized(Vector::zero()), Vector::zero());
    }

    #[test]
    fn checked_div_rejects_small_divisor() {
        assert_eq!(
            checked_div(vec3(1.0, 1.0, 1.0), EPSILON / 2.0),
            Err(GeometryError::DivisionByZero)
        );
        assert!(checked_div(vec3(1.0, 1.0, 1.0), 2.0).is_ok());
    }

    #[test]
    fn collinear_detects_parallel_vectors() {
        let u = vec3(1.0, 0.0, 0.0);
        let v = vec3(2.0, 0.0, 0.0);
        assert!(is_collinear(u, v));
        assert!(!is_collinear(u, vec3(0.0, 1.0, 0.0)));
    }

    #[test]
    #[should_panic]
    fn out_of_range_axis_panics() {
        axis(Vector::zero(), 3);
    }
}
