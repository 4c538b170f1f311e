//! Ray type for intersection queries.
//!
//! A ray is an origin point plus a direction vector. The direction is not
//! required to be normalized; hulls transform rays into their own space,
//! which generally changes its length.

use tracer_math::{Matrix4, Vector4};

use crate::{Hull, Intersections};

/// A ray with origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vector4,
    direction: Vector4,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vector4, direction: Vector4) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn origin(&self) -> Vector4 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vector4 {
        self.direction
    }

    /// Compute a point along the ray at distance t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn position(&self, t: f64) -> Vector4 {
        self.origin + self.direction * t
    }

    /// Copy of this ray with both origin and direction multiplied by `matrix`.
    pub fn transform(&self, matrix: &Matrix4) -> Ray {
        Ray::new(matrix.transform(self.origin), matrix.transform(self.direction))
    }

    /// Intersect this ray with a single hull.
    pub fn intersects<'a>(&self, hull: &'a Hull) -> Intersections<'a> {
        hull.intersect(self)
    }
}
