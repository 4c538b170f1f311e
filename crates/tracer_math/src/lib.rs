//! Tracer math - homogeneous tuples, colors and square matrices.
//!
//! Points and directions share the [`Vector4`] type and are told apart by
//! `w` (1 for points, 0 for directions). All equality comparisons in this
//! crate are tolerance based, using [`EPSILON`] as an absolute bound.

mod color;
mod error;
mod matrix;
mod transform;
mod tuple;

pub use color::Color;
pub use error::{MathError, MathResult};
pub use matrix::{Matrix, Matrix2, Matrix3, Matrix4, SquareMatrix};
pub use transform::{rotation_x, rotation_y, rotation_z, scaling, shearing, translation};
pub use tuple::Vector4;

/// Absolute tolerance used for every floating point comparison.
pub const EPSILON: f64 = 0.00001;

/// Compare two reals within [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
        assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
        assert!(approx_eq(-0.0, 0.0));
    }
}
