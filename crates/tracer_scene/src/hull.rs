//! Hulls: shapes placed in the world with a transform and a material.

use std::sync::Arc;

use tracer_math::{Color, Matrix4, Vector4};

use crate::{Intersection, Intersections, Light, Material, Plane, Ray, SceneResult, Shape, Sphere};

/// A renderable surface.
///
/// The transform's inverse and inverse-transpose are computed once when the
/// transform is assigned, so intersection and normal queries never invert.
#[derive(Debug, Clone)]
pub struct Hull {
    shape: Arc<dyn Shape>,
    transform: Matrix4,
    inverse: Matrix4,
    normal_transform: Matrix4,
    /// Surface description, freely replaceable between renders
    pub material: Material,
}

impl Hull {
    /// Create a hull with the identity transform and the default material.
    pub fn new(shape: impl Shape + 'static) -> Self {
        Self {
            shape: Arc::new(shape),
            transform: Matrix4::identity(),
            inverse: Matrix4::identity(),
            normal_transform: Matrix4::identity(),
            material: Material::default(),
        }
    }

    /// A unit sphere at the origin.
    pub fn sphere() -> Self {
        Self::new(Sphere::new())
    }

    /// The xz plane.
    pub fn plane() -> Self {
        Self::new(Plane::new())
    }

    /// Set the transform. Fails if it cannot be inverted.
    pub fn with_transform(mut self, transform: Matrix4) -> SceneResult<Self> {
        self.set_transform(transform)?;
        Ok(self)
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Replace the transform. On failure the hull is left unchanged.
    pub fn set_transform(&mut self, transform: Matrix4) -> SceneResult<()> {
        let inverse = transform.inverse()?;
        self.normal_transform = inverse.transpose();
        self.inverse = inverse;
        self.transform = transform;
        Ok(())
    }

    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    pub fn inverse_transform(&self) -> &Matrix4 {
        &self.inverse
    }

    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    /// Map a world-space point into this hull's local space.
    #[inline]
    pub fn world_to_object(&self, point: Vector4) -> Vector4 {
        self.inverse.transform(point)
    }

    /// Intersect a world-space ray with this hull.
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        let local_ray = ray.transform(&self.inverse);
        self.shape
            .local_intersect(&local_ray)
            .into_iter()
            .map(|t| Intersection::new(t, self))
            .collect()
    }

    /// World-space unit normal at a world-space point on the surface.
    pub fn normal_at(&self, world_point: Vector4) -> Vector4 {
        let local_point = self.world_to_object(world_point);
        let local_normal = self.shape.local_normal_at(local_point);
        self.normal_transform
            .transform(local_normal)
            .with_w(0.0)
            .normalize_or_zero()
    }

    /// Phong shading of a point on this hull.
    pub fn lighting(
        &self,
        light: &Light,
        point: Vector4,
        eye: Vector4,
        normal: Vector4,
        in_shadow: bool,
    ) -> Color {
        self.material
            .lighting(self, light, point, eye, normal, in_shadow)
    }
}

impl Default for Hull {
    fn default() -> Self {
        Self::sphere()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SceneError;
    use std::f64::consts::PI;
    use tracer_math::{rotation_z, scaling, translation, MathError};

    #[test]
    fn test_default_transform_and_material() {
        let hull = Hull::sphere();
        assert_eq!(hull.transform(), &Matrix4::identity());
        assert_eq!(hull.material, Material::default());
        assert_eq!(hull.shape().name(), "sphere");
    }

    #[test]
    fn test_defaults_are_independent() {
        let mut a = Hull::sphere();
        let b = Hull::sphere();
        a.material.ambient = 1.0;
        a.set_transform(translation(2.0, 3.0, 4.0)).unwrap();

        assert_eq!(b.material.ambient, 0.1);
        assert_eq!(b.transform(), &Matrix4::identity());
    }

    #[test]
    fn test_singular_transform_is_rejected() {
        let mut hull = Hull::sphere();
        let err = hull.set_transform(scaling(0.0, 1.0, 1.0)).unwrap_err();

        assert_eq!(err, SceneError::Math(MathError::SingularMatrix));
        assert_eq!(hull.transform(), &Matrix4::identity());
    }

    #[test]
    fn test_intersect_tags_hull_in_order() {
        let hull = Hull::sphere();
        let ray = Ray::new(Vector4::point(0.0, 0.0, -5.0), Vector4::vector(0.0, 0.0, 1.0));
        let xs = hull.intersect(&ray);

        assert_eq!(xs.len(), 2);
        assert_eq!(xs[0].distance, 4.0);
        assert_eq!(xs[1].distance, 6.0);
        assert!(std::ptr::eq(xs[0].hull, &hull));
    }

    #[test]
    fn test_intersect_scaled_sphere() {
        let hull = Hull::sphere().with_transform(scaling(2.0, 2.0, 2.0)).unwrap();
        let ray = Ray::new(Vector4::point(0.0, 0.0, -5.0), Vector4::vector(0.0, 0.0, 1.0));
        let xs = ray.intersects(&hull);

        assert_eq!(xs.len(), 2);
        assert_eq!(xs[0].distance, 3.0);
        assert_eq!(xs[1].distance, 7.0);
    }

    #[test]
    fn test_intersect_translated_sphere_misses() {
        let hull = Hull::sphere().with_transform(translation(5.0, 0.0, 0.0)).unwrap();
        let ray = Ray::new(Vector4::point(0.0, 0.0, -5.0), Vector4::vector(0.0, 0.0, 1.0));
        assert!(hull.intersect(&ray).is_empty());
    }

    #[test]
    fn test_plane_hull_intersect() {
        let hull = Hull::plane().with_transform(translation(0.0, -1.0, 0.0)).unwrap();
        let ray = Ray::new(Vector4::point(0.0, 1.0, 0.0), Vector4::vector(0.0, -1.0, 0.0));
        let xs = hull.intersect(&ray);

        assert_eq!(xs.len(), 1);
        assert_eq!(xs[0].distance, 2.0);
    }

    #[test]
    fn test_normals_are_unit_vectors() {
        let hull = Hull::sphere();
        let third = 3f64.sqrt() / 3.0;
        let normal = hull.normal_at(Vector4::point(third, third, third));

        assert_eq!(normal, Vector4::vector(third, third, third));
        assert_eq!(normal, normal.normalize().unwrap());
    }

    #[test]
    fn test_normal_translated_sphere() {
        let hull = Hull::sphere().with_transform(translation(0.0, 1.0, 0.0)).unwrap();
        let normal = hull.normal_at(Vector4::point(0.0, 1.70711, -0.70711));
        assert_eq!(normal, Vector4::vector(0.0, 0.70711, -0.70711));
    }

    #[test]
    fn test_normal_non_uniformly_scaled_sphere() {
        let transform = Matrix4::identity().rotate_z(PI / 5.0).scale(1.0, 0.5, 1.0);
        assert_eq!(transform, scaling(1.0, 0.5, 1.0).multiply(&rotation_z(PI / 5.0)));

        let hull = Hull::sphere().with_transform(transform).unwrap();
        let half = 2f64.sqrt() / 2.0;
        let normal = hull.normal_at(Vector4::point(0.0, half, -half));

        assert_eq!(normal, Vector4::vector(0.0, 0.97014, -0.24254));
        assert_eq!(normal.w(), 0.0);
    }

    #[test]
    fn test_plane_hull_normal_follows_rotation() {
        let hull = Hull::plane()
            .with_transform(rotation_z(PI / 2.0))
            .unwrap();
        let normal = hull.normal_at(Vector4::point(0.0, 5.0, 0.0));
        assert_eq!(normal, Vector4::vector(-1.0, 0.0, 0.0));
    }
}
