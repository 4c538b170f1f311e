//! Pinhole camera mapping canvas pixels to world-space rays.

use tracer_math::{Matrix4, Vector4};
use tracer_scene::{Ray, World};

use crate::{renderer, Canvas, RenderConfig, RenderResult};

/// A camera looking down -z from the origin of its own frame, with the
/// image plane at z = -1.
#[derive(Debug, Clone)]
pub struct Camera {
    hsize: u32,
    vsize: u32,
    field_of_view: f64,
    transform: Matrix4,
    inverse: Matrix4,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    /// Create a camera with the identity transform.
    ///
    /// `field_of_view` is in radians and spans the longer image axis.
    pub fn new(hsize: u32, vsize: u32, field_of_view: f64) -> Self {
        let half_view = (field_of_view / 2.0).tan();

        let (half_width, half_height, pixel_size) = if hsize == 0 || vsize == 0 {
            log::warn!("Camera created with zero-size image {}x{}", hsize, vsize);
            (half_view, half_view, 0.0)
        } else {
            let aspect = hsize as f64 / vsize as f64;
            let (half_width, half_height) = if aspect >= 1.0 {
                (half_view, half_view / aspect)
            } else {
                (half_view * aspect, half_view)
            };
            (half_width, half_height, half_width * 2.0 / hsize as f64)
        };

        log::debug!(
            "Camera {}x{} fov={:.4} pixel_size={:.6}",
            hsize,
            vsize,
            field_of_view,
            pixel_size
        );

        Self {
            hsize,
            vsize,
            field_of_view,
            transform: Matrix4::identity(),
            inverse: Matrix4::identity(),
            half_width,
            half_height,
            pixel_size,
        }
    }

    /// Set the view transform. Fails if it cannot be inverted.
    pub fn with_transform(mut self, transform: Matrix4) -> RenderResult<Self> {
        self.set_transform(transform)?;
        Ok(self)
    }

    /// Replace the view transform. On failure the camera is left unchanged.
    pub fn set_transform(&mut self, transform: Matrix4) -> RenderResult<()> {
        self.inverse = transform.inverse()?;
        self.transform = transform;
        Ok(())
    }

    pub fn hsize(&self) -> u32 {
        self.hsize
    }

    pub fn vsize(&self) -> u32 {
        self.vsize
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    /// World-space width of one pixel on the image plane.
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// The ray from the camera through the center of pixel (px, py).
    pub fn ray_for_pixel(&self, px: u32, py: u32) -> Ray {
        let x_offset = (px as f64 + 0.5) * self.pixel_size;
        let y_offset = (py as f64 + 0.5) * self.pixel_size;

        // Camera looks toward -z, so +x is to the left
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        let pixel = self
            .inverse
            .transform(Vector4::point(world_x, world_y, -1.0));
        let origin = self.inverse.transform(Vector4::point(0.0, 0.0, 0.0));
        let direction = (pixel - origin).normalize_or_zero();

        Ray::new(origin, direction)
    }

    /// Render `world` with the default configuration on the global rayon
    /// pool.
    pub fn render(&self, world: &World) -> Canvas {
        renderer::render_buckets(self, world, &RenderConfig::default())
    }

    /// Render `world` on a dedicated thread pool sized by `config`.
    pub fn render_with(&self, world: &World, config: &RenderConfig) -> RenderResult<Canvas> {
        renderer::render(self, world, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderError;
    use std::f64::consts::PI;
    use tracer_math::{approx_eq, scaling, Color, MathError};

    #[test]
    fn test_construct_camera() {
        let c = Camera::new(160, 120, PI / 2.0);
        assert_eq!(c.hsize(), 160);
        assert_eq!(c.vsize(), 120);
        assert_eq!(c.field_of_view(), PI / 2.0);
        assert_eq!(c.transform(), &Matrix4::identity());
    }

    #[test]
    fn test_pixel_size_horizontal_canvas() {
        let c = Camera::new(200, 125, PI / 2.0);
        assert!(approx_eq(c.pixel_size(), 0.01));
    }

    #[test]
    fn test_pixel_size_vertical_canvas() {
        let c = Camera::new(125, 200, PI / 2.0);
        assert!(approx_eq(c.pixel_size(), 0.01));
    }

    #[test]
    fn test_zero_size_camera() {
        let _ = env_logger::builder().is_test(true).try_init();
        let c = Camera::new(0, 10, PI / 2.0);
        assert_eq!(c.pixel_size(), 0.0);

        let canvas = c.render(&World::default_scene());
        assert!(canvas.pixels().is_empty());
    }

    #[test]
    fn test_ray_through_center() {
        let c = Camera::new(201, 101, PI / 2.0);
        let r = c.ray_for_pixel(100, 50);

        assert_eq!(r.origin(), Vector4::point(0.0, 0.0, 0.0));
        assert_eq!(r.direction(), Vector4::vector(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_ray_through_corner() {
        let c = Camera::new(201, 101, PI / 2.0);
        let r = c.ray_for_pixel(0, 0);

        assert_eq!(r.origin(), Vector4::point(0.0, 0.0, 0.0));
        assert_eq!(r.direction(), Vector4::vector(0.66519, 0.33259, -0.66851));
    }

    #[test]
    fn test_ray_with_transformed_camera() {
        let transform = Matrix4::identity()
            .translate(0.0, -2.0, 5.0)
            .rotate_y(PI / 4.0);
        let c = Camera::new(201, 101, PI / 2.0)
            .with_transform(transform)
            .unwrap();
        let r = c.ray_for_pixel(100, 50);

        let half = 2f64.sqrt() / 2.0;
        assert_eq!(r.origin(), Vector4::point(0.0, 2.0, -5.0));
        assert_eq!(r.direction(), Vector4::vector(half, 0.0, -half));
    }

    #[test]
    fn test_singular_transform_is_rejected() {
        let mut c = Camera::new(10, 10, PI / 2.0);
        let err = c.set_transform(scaling(1.0, 0.0, 1.0)).unwrap_err();

        assert_eq!(err, RenderError::Math(MathError::SingularMatrix));
        assert_eq!(c.transform(), &Matrix4::identity());
    }

    #[test]
    fn test_render_default_scene() {
        let w = World::default_scene();
        let view = Matrix4::view(
            Vector4::point(0.0, 0.0, -5.0),
            Vector4::point(0.0, 0.0, 0.0),
            Vector4::vector(0.0, 1.0, 0.0),
        )
        .unwrap();
        let c = Camera::new(11, 11, PI / 2.0).with_transform(view).unwrap();

        let image = c.render(&w);
        assert_eq!(image.get(5, 5), Some(Color::new(0.38066, 0.47583, 0.2855)));
    }
}
