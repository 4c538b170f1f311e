//! Homogeneous 4-component tuples.
//!
//! A [`Vector4`] is either a point (`w = 1`) or a direction (`w = 0`).
//! Subtracting two points yields a direction; adding a direction to a point
//! yields a point. Adding two points is structurally allowed but has no
//! meaning in the domain.

use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::DVec4;
use serde::{Deserialize, Serialize};

use crate::{approx_eq, MathError, MathResult};

/// A point or direction in homogeneous coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector4(DVec4);

impl Vector4 {
    /// The zero direction.
    pub const ZERO: Vector4 = Vector4(DVec4::ZERO);

    /// Create a tuple from raw components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self(DVec4::new(x, y, z, w))
    }

    /// Create a point (`w = 1`).
    #[inline]
    pub fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Create a direction (`w = 0`).
    #[inline]
    pub fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.0.w
    }

    pub fn is_point(&self) -> bool {
        approx_eq(self.0.w, 1.0)
    }

    pub fn is_vector(&self) -> bool {
        approx_eq(self.0.w, 0.0)
    }

    /// Copy of this tuple with `w` replaced.
    #[inline]
    pub fn with_w(self, w: f64) -> Self {
        Self::new(self.0.x, self.0.y, self.0.z, w)
    }

    pub fn to_array(&self) -> [f64; 4] {
        self.0.to_array()
    }

    /// Dot product over all four components.
    #[inline]
    pub fn dot(&self, other: Vector4) -> f64 {
        self.0.dot(other.0)
    }

    /// Cross product of two directions. The result is always a direction.
    ///
    /// Debug builds panic when either operand is a point.
    pub fn cross(&self, other: Vector4) -> Vector4 {
        debug_assert!(
            self.is_vector() && other.is_vector(),
            "cross product is defined on directions only"
        );
        let c = self.0.truncate().cross(other.0.truncate());
        Self::vector(c.x, c.y, c.z)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.0.length()
    }

    /// Unit-length copy of this tuple.
    ///
    /// Fails with [`MathError::ZeroMagnitude`] instead of dividing by zero.
    pub fn normalize(&self) -> MathResult<Vector4> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(MathError::ZeroMagnitude);
        }
        Ok(*self / magnitude)
    }

    /// Unit-length copy of this tuple, or [`Vector4::ZERO`] for a zero input.
    ///
    /// Used on shading paths where a degenerate vector must stay finite.
    pub fn normalize_or_zero(&self) -> Vector4 {
        self.normalize().unwrap_or(Self::ZERO)
    }

    /// Mirror this vector around `normal`.
    pub fn reflect(&self, normal: Vector4) -> Vector4 {
        *self - normal * 2.0 * self.dot(normal)
    }
}

impl TryFrom<&[f64]> for Vector4 {
    type Error = MathError;

    fn try_from(values: &[f64]) -> MathResult<Self> {
        match values {
            [x, y, z, w] => Ok(Self::new(*x, *y, *z, *w)),
            _ => Err(MathError::DimensionMismatch {
                expected: 4,
                found: values.len(),
            }),
        }
    }
}

impl PartialEq for Vector4 {
    fn eq(&self, other: &Self) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| approx_eq(*a, *b))
    }
}

impl Add for Vector4 {
    type Output = Vector4;

    fn add(self, rhs: Vector4) -> Vector4 {
        Vector4(self.0 + rhs.0)
    }
}

impl Sub for Vector4 {
    type Output = Vector4;

    fn sub(self, rhs: Vector4) -> Vector4 {
        Vector4(self.0 - rhs.0)
    }
}

impl Neg for Vector4 {
    type Output = Vector4;

    fn neg(self) -> Vector4 {
        Vector4(-self.0)
    }
}

impl Mul<f64> for Vector4 {
    type Output = Vector4;

    fn mul(self, scalar: f64) -> Vector4 {
        Vector4(self.0 * scalar)
    }
}

impl Div<f64> for Vector4 {
    type Output = Vector4;

    fn div(self, scalar: f64) -> Vector4 {
        Vector4(self.0 / scalar)
    }
}

impl From<Vector4> for DVec4 {
    fn from(v: Vector4) -> Self {
        v.0
    }
}

impl From<DVec4> for Vector4 {
    fn from(v: DVec4) -> Self {
        Self(v)
    }
}
