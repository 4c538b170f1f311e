//! Point light source.

use serde::{Deserialize, Serialize};
use tracer_math::{Color, Vector4};

/// A point light with no size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vector4,
    pub intensity: Color,
}

impl Light {
    pub fn new(position: Vector4, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

impl Default for Light {
    /// A white light at the origin.
    fn default() -> Self {
        Self::new(Vector4::point(0.0, 0.0, 0.0), Color::WHITE)
    }
}
