//! Tracer render - camera, canvas and bucket-parallel rendering.
//!
//! A [`Camera`] turns pixels into rays; the render loop splits the image
//! into [`Bucket`]s, traces them on a rayon pool and composites the
//! results into a [`Canvas`].
//!
//! # Example
//!
//! ```
//! use std::f64::consts::PI;
//! use tracer_math::{Matrix4, Vector4};
//! use tracer_render::{Camera, RenderConfig};
//! use tracer_scene::World;
//!
//! let view = Matrix4::view(
//!     Vector4::point(0.0, 0.0, -5.0),
//!     Vector4::point(0.0, 0.0, 0.0),
//!     Vector4::vector(0.0, 1.0, 0.0),
//! )?;
//! let camera = Camera::new(32, 24, PI / 3.0).with_transform(view)?;
//! let config = RenderConfig { threads: 2, ..Default::default() };
//!
//! let canvas = camera.render_with(&World::default_scene(), &config)?;
//! assert_eq!(canvas.to_rgba8().len(), 32 * 24 * 4);
//! # Ok::<(), tracer_render::RenderError>(())
//! ```

mod bucket;
mod camera;
mod canvas;
mod error;
mod renderer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use canvas::Canvas;
pub use error::{RenderError, RenderResult};
pub use renderer::{render, render_buckets, render_pixel, RenderConfig};
