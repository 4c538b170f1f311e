//! The world: every hull in the scene plus its light.

use tracer_math::{scaling, Color, Vector4};

use crate::{Computations, Hull, Intersections, Light, Material, Ray, SceneError, SceneResult};

/// A scene ready to be queried with rays.
///
/// `Default` is the empty world with no light. Use [`World::default_scene`]
/// for the two-sphere reference scene.
#[derive(Debug, Clone, Default)]
pub struct World {
    hulls: Vec<Hull>,
    light: Option<Light>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.light = Some(light);
        self
    }

    pub fn with_hull(mut self, hull: Hull) -> Self {
        self.hulls.push(hull);
        self
    }

    /// Append a hull and return its index.
    pub fn add_hull(&mut self, hull: Hull) -> usize {
        self.hulls.push(hull);
        self.hulls.len() - 1
    }

    pub fn hulls(&self) -> &[Hull] {
        &self.hulls
    }

    pub fn hulls_mut(&mut self) -> &mut [Hull] {
        &mut self.hulls
    }

    pub fn hull(&self, index: usize) -> SceneResult<&Hull> {
        self.hulls.get(index).ok_or(SceneError::UnknownHull(index))
    }

    pub fn hull_mut(&mut self, index: usize) -> SceneResult<&mut Hull> {
        self.hulls
            .get_mut(index)
            .ok_or(SceneError::UnknownHull(index))
    }

    pub fn light(&self) -> Option<&Light> {
        self.light.as_ref()
    }

    pub fn set_light(&mut self, light: Option<Light>) {
        self.light = light;
    }

    pub fn len(&self) -> usize {
        self.hulls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hulls.is_empty()
    }

    /// The two-sphere reference scene lit from the upper left.
    pub fn default_scene() -> Self {
        let light = Light::new(Vector4::point(-10.0, 10.0, -10.0), Color::WHITE);

        let outer = Hull::sphere().with_material(Material {
            diffuse: 0.7,
            specular: 0.2,
            ..Material::new(Color::new(0.8, 1.0, 0.6))
        });

        // Scaling by a non-zero factor is always invertible
        let mut inner = Hull::sphere();
        if let Err(e) = inner.set_transform(scaling(0.5, 0.5, 0.5)) {
            log::warn!("Default scene inner sphere left untransformed: {}", e);
        }

        let world = Self::new()
            .with_light(light)
            .with_hull(outer)
            .with_hull(inner);
        log::debug!("Built default scene with {} hulls", world.len());
        world
    }

    /// Every intersection of `ray` with the scene, sorted by distance.
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        let mut xs: Intersections<'_> = self
            .hulls
            .iter()
            .flat_map(|hull| hull.intersect(ray))
            .collect();
        xs.sort();
        xs
    }

    /// Whether something lies between `point` and the light.
    ///
    /// A world without a light casts no shadows.
    pub fn is_shadowed(&self, point: Vector4) -> bool {
        let Some(light) = &self.light else {
            return false;
        };

        let to_light = light.position - point;
        let distance = to_light.magnitude();
        let ray = Ray::new(point, to_light.normalize_or_zero());

        matches!(self.intersect(&ray).hit(), Some(hit) if hit.distance < distance)
    }

    /// Color at a prepared hit. Black when the world has no light.
    pub fn shade_hit(&self, comps: &Computations<'_>) -> Color {
        let Some(light) = &self.light else {
            return Color::BLACK;
        };

        let shadowed = self.is_shadowed(comps.over_point);
        comps
            .hull
            .lighting(light, comps.over_point, comps.eye, comps.normal, shadowed)
    }

    /// Color seen along `ray`, black where nothing is hit.
    pub fn color_at(&self, ray: &Ray) -> Color {
        self.color_at_or(ray, Color::BLACK)
    }

    /// Color seen along `ray`, `background` where nothing is hit.
    pub fn color_at_or(&self, ray: &Ray, background: Color) -> Color {
        let xs = self.intersect(ray);
        match xs.hit() {
            Some(hit) => self.shade_hit(&hit.prepare_computations(ray)),
            None => background,
        }
    }
}
