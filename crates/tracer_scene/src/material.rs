//! Phong surface description and the lighting equation.

use tracer_math::{Color, Vector4};

use crate::{Hull, Light, Pattern};

/// Surface reflectance parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base color, ignored when a pattern is set
    pub color: Color,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    /// Specular exponent; larger is a tighter highlight
    pub shininess: f64,
    pub pattern: Option<Pattern>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            pattern: None,
        }
    }
}

impl Material {
    /// Default material with a different base color.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Phong shading for a single light.
    ///
    /// `hull` is the surface the material belongs to; patterns are
    /// evaluated in its local space. Nothing is clamped here.
    pub fn lighting(
        &self,
        hull: &Hull,
        light: &Light,
        point: Vector4,
        eye: Vector4,
        normal: Vector4,
        in_shadow: bool,
    ) -> Color {
        let surface = match &self.pattern {
            Some(pattern) => pattern.color_at_hull(hull, point),
            None => self.color,
        };
        let effective_color = surface * light.intensity;
        let light_vector = (light.position - point).normalize_or_zero();

        let ambient = effective_color * self.ambient;

        let light_dot_normal = light_vector.dot(normal);
        if light_dot_normal < 0.0 || in_shadow {
            return ambient;
        }

        let diffuse = effective_color * self.diffuse * light_dot_normal;

        let reflect_dot_eye = (-light_vector).reflect(normal).dot(eye);
        if reflect_dot_eye < 0.0 {
            return ambient + diffuse;
        }

        let specular = light.intensity * self.specular * reflect_dot_eye.powf(self.shininess);
        ambient + diffuse + specular
    }
}
