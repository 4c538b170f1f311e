//! Shape trait and the built-in implicit surfaces.
//!
//! A shape only knows its own untransformed local frame. Moving rays into
//! that frame and normals back out is done once, by [`crate::Hull`].

use std::fmt::Debug;

use tracer_math::{Vector4, EPSILON};

use crate::Ray;

/// Local-space geometry of a hull.
pub trait Shape: Debug + Send + Sync {
    /// Distances along `ray` (already in local space) where it meets the
    /// surface. Order is not significant.
    fn local_intersect(&self, ray: &Ray) -> Vec<f64>;

    /// Outward normal at a local-space point on the surface. Need not be
    /// normalized.
    fn local_normal_at(&self, point: Vector4) -> Vector4;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// A unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vector4,
}

impl Sphere {
    /// A unit sphere at the local origin.
    pub fn new() -> Self {
        Self {
            center: Vector4::point(0.0, 0.0, 0.0),
        }
    }

    pub fn center(&self) -> Vector4 {
        self.center
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Sphere {
    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        let sphere_to_ray = ray.origin() - self.center;
        let direction = ray.direction();

        let a = direction.dot(direction);
        let b = 2.0 * direction.dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.0;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Vec::new();
        }

        let sqrtd = discriminant.sqrt();
        vec![(-b - sqrtd) / (2.0 * a), (-b + sqrtd) / (2.0 * a)]
    }

    fn local_normal_at(&self, point: Vector4) -> Vector4 {
        point - self.center
    }

    fn name(&self) -> &'static str {
        "sphere"
    }
}

/// The xz plane (y = 0), extending infinitely.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Plane;

impl Plane {
    pub fn new() -> Self {
        Self
    }
}

impl Shape for Plane {
    fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
        let direction = ray.direction();
        // Parallel or coplanar rays never meet the plane
        if direction.y().abs() < EPSILON {
            return Vec::new();
        }
        vec![-ray.origin().y() / direction.y()]
    }

    fn local_normal_at(&self, _point: Vector4) -> Vector4 {
        Vector4::vector(0.0, 1.0, 0.0)
    }

    fn name(&self) -> &'static str {
        "plane"
    }
}
