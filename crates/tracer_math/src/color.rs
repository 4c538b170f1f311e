//! RGB colors with unbounded channels.

use std::ops::{Add, AddAssign, Div, Mul, Sub};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::{approx_eq, MathError, MathResult};

/// An RGB color. Channels are not clamped until output time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(DVec3);

impl Color {
    pub const BLACK: Color = Color(DVec3::ZERO);
    pub const WHITE: Color = Color(DVec3::ONE);
    pub const RED: Color = Color(DVec3::X);
    pub const GREEN: Color = Color(DVec3::Y);
    pub const BLUE: Color = Color(DVec3::Z);

    #[inline]
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self(DVec3::new(red, green, blue))
    }

    #[inline]
    pub fn red(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn green(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn blue(&self) -> f64 {
        self.0.z
    }

    pub fn to_array(&self) -> [f64; 3] {
        self.0.to_array()
    }

    /// Component-wise (Hadamard) product.
    #[inline]
    pub fn hadamard(&self, other: Color) -> Color {
        Color(self.0 * other.0)
    }

    /// Linear interpolation towards `other` by `t`.
    pub fn lerp(&self, other: Color, t: f64) -> Color {
        *self + (other - *self) * t
    }

    /// Convert to 8-bit RGB, clamping each channel to [0, 1] first.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let scale = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [scale(self.0.x), scale(self.0.y), scale(self.0.z)]
    }
}

impl TryFrom<&[f64]> for Color {
    type Error = MathError;

    fn try_from(values: &[f64]) -> MathResult<Self> {
        match values {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(MathError::DimensionMismatch {
                expected: 3,
                found: values.len(),
            }),
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.0.x, other.0.x)
            && approx_eq(self.0.y, other.0.y)
            && approx_eq(self.0.z, other.0.z)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color(self.0 + rhs.0)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        self.0 += rhs.0;
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color(self.0 - rhs.0)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, scalar: f64) -> Color {
        Color(self.0 * scalar)
    }
}

impl Mul<Color> for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        self.hadamard(rhs)
    }
}

impl Div<f64> for Color {
    type Output = Color;

    fn div(self, scalar: f64) -> Color {
        Color(self.0 / scalar)
    }
}
