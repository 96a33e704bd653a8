pub mod accelerators;
pub mod error;
pub mod kernel;
pub mod linear;
pub mod shape;

pub use crate::accelerators::Bvh;
pub use crate::error::{GeometryError, InputError};
pub use crate::linear::{Point, Vector, EPSILON};
pub use crate::shape::{Aabb, Segment, Triangle, TriangleKind};
