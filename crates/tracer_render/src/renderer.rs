//! Render configuration and the parallel render loop.
//!
//! Buckets are traced on a rayon pool; their results are composited into
//! the canvas by a single writer once every bucket has finished.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracer_math::Color;
use tracer_scene::World;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Camera, Canvas, RenderError, RenderResult};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Worker threads; 0 lets rayon pick
    pub threads: usize,
    /// Bucket edge length in pixels
    pub bucket_size: u32,
    /// Color for rays that hit nothing
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            bucket_size: DEFAULT_BUCKET_SIZE,
            background: Color::BLACK,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> RenderResult<()> {
        if self.bucket_size == 0 {
            return Err(RenderError::InvalidConfig(
                "bucket_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Color of a single pixel.
pub fn render_pixel(
    camera: &Camera,
    world: &World,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let ray = camera.ray_for_pixel(x, y);
    world.color_at_or(&ray, config.background)
}

/// Render on a dedicated pool with `config.threads` workers.
pub fn render(camera: &Camera, world: &World, config: &RenderConfig) -> RenderResult<Canvas> {
    config.validate()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map_err(|e| RenderError::ThreadPool(e.to_string()))?;

    log::debug!("Render pool ready with {} threads", pool.current_num_threads());
    Ok(pool.install(|| render_buckets(camera, world, config)))
}

/// Render on whichever rayon pool the caller is running in.
pub fn render_buckets(camera: &Camera, world: &World, config: &RenderConfig) -> Canvas {
    let (width, height) = (camera.hsize(), camera.vsize());
    let buckets = generate_buckets(width, height, config.bucket_size);

    if world.light().is_none() {
        log::warn!("Rendering a world with no light; every hit shades black");
    }
    log::info!(
        "Rendering {}x{} image in {} buckets ({} hulls)",
        width,
        height,
        buckets.len(),
        world.len()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, camera, world, config))
        .collect();

    let mut canvas = Canvas::new(width, height);
    for result in &results {
        for (x, y, color) in result.image_pixels() {
            canvas.set(x, y, color);
        }
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    canvas
}
