//! Procedural surface patterns.
//!
//! A [`Pattern`] is a tree: leaves are solid colors, inner nodes pick or
//! combine the colors of their two children. Every node carries its own
//! transform. A node maps the incoming point into its own space, then hands
//! that point to its children, so child transforms stack on top of the
//! parent's rather than replacing it.
//!
//! ```
//! use std::f64::consts::PI;
//! use tracer_math::{rotation_y, scaling, Color, Vector4};
//! use tracer_scene::Pattern;
//!
//! let grass = Pattern::stripe(Color::new(0.25, 0.47, 0.09), Color::new(0.2, 0.32, 0.12))
//!     .with_transform(scaling(0.2, 1.0, 0.2).multiply(&rotation_y(PI / 4.0)))?;
//! let floor = Pattern::checkered(grass, Color::new(0.4, 0.1, 0.4));
//!
//! let c = floor.color_at(Vector4::point(1.5, 0.0, 0.5));
//! assert_eq!(c, Color::new(0.4, 0.1, 0.4));
//! # Ok::<(), tracer_scene::SceneError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracer_math::{Color, Matrix4, Vector4};

use crate::{Hull, SceneResult};

/// Per-channel operator used by [`PatternKind::Blend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// `a + b`
    Add,
    /// `a * b`
    Multiply,
    /// `1 - (1 - a)(1 - b)`
    Screen,
    /// `(a + b) / 2`
    Average,
}

impl BlendMode {
    pub fn apply(&self, a: Color, b: Color) -> Color {
        match self {
            BlendMode::Add => a + b,
            BlendMode::Multiply => a * b,
            BlendMode::Screen => Color::WHITE - (Color::WHITE - a) * (Color::WHITE - b),
            BlendMode::Average => (a + b) / 2.0,
        }
    }
}

/// The rule a pattern node applies.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternKind {
    Solid(Color),
    /// Alternates on `floor(x)`.
    Stripe(Box<Pattern>, Box<Pattern>),
    /// Alternates on `floor(sqrt(x² + z²))`.
    Ring(Box<Pattern>, Box<Pattern>),
    /// Alternates on `floor(x) + floor(y) + floor(z)`.
    Checkered(Box<Pattern>, Box<Pattern>),
    /// Interpolates on the fractional part of x.
    Gradient(Box<Pattern>, Box<Pattern>),
    /// Interpolates on the fractional part of `sqrt(x² + z²)`.
    RadialGradient(Box<Pattern>, Box<Pattern>),
    Blend(BlendMode, Box<Pattern>, Box<Pattern>),
}

/// A node in a pattern tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    kind: PatternKind,
    transform: Matrix4,
    inverse: Matrix4,
}

impl Pattern {
    pub fn new(kind: PatternKind) -> Self {
        Self {
            kind,
            transform: Matrix4::identity(),
            inverse: Matrix4::identity(),
        }
    }

    pub fn solid(color: Color) -> Self {
        Self::new(PatternKind::Solid(color))
    }

    pub fn stripe(first: impl Into<Pattern>, second: impl Into<Pattern>) -> Self {
        Self::new(PatternKind::Stripe(boxed(first), boxed(second)))
    }

    pub fn ring(first: impl Into<Pattern>, second: impl Into<Pattern>) -> Self {
        Self::new(PatternKind::Ring(boxed(first), boxed(second)))
    }

    pub fn checkered(first: impl Into<Pattern>, second: impl Into<Pattern>) -> Self {
        Self::new(PatternKind::Checkered(boxed(first), boxed(second)))
    }

    pub fn gradient(first: impl Into<Pattern>, second: impl Into<Pattern>) -> Self {
        Self::new(PatternKind::Gradient(boxed(first), boxed(second)))
    }

    pub fn radial_gradient(first: impl Into<Pattern>, second: impl Into<Pattern>) -> Self {
        Self::new(PatternKind::RadialGradient(boxed(first), boxed(second)))
    }

    pub fn blend(mode: BlendMode, first: impl Into<Pattern>, second: impl Into<Pattern>) -> Self {
        Self::new(PatternKind::Blend(mode, boxed(first), boxed(second)))
    }

    pub fn add(first: impl Into<Pattern>, second: impl Into<Pattern>) -> Self {
        Self::blend(BlendMode::Add, first, second)
    }

    pub fn multiply(first: impl Into<Pattern>, second: impl Into<Pattern>) -> Self {
        Self::blend(BlendMode::Multiply, first, second)
    }

    pub fn screen(first: impl Into<Pattern>, second: impl Into<Pattern>) -> Self {
        Self::blend(BlendMode::Screen, first, second)
    }

    pub fn average(first: impl Into<Pattern>, second: impl Into<Pattern>) -> Self {
        Self::blend(BlendMode::Average, first, second)
    }

    /// Set this node's transform. Fails if it cannot be inverted.
    pub fn with_transform(mut self, transform: Matrix4) -> SceneResult<Self> {
        self.inverse = transform.inverse()?;
        self.transform = transform;
        Ok(self)
    }

    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }

    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    /// Color at a world-space point on `hull`.
    pub fn color_at_hull(&self, hull: &Hull, world_point: Vector4) -> Color {
        self.color_at(hull.world_to_object(world_point))
    }

    /// Color at a point given in the parent's space (hull space for the
    /// root of the tree).
    pub fn color_at(&self, point: Vector4) -> Color {
        let local = self.inverse.transform(point);
        let (x, y, z) = (local.x(), local.y(), local.z());

        match &self.kind {
            PatternKind::Solid(color) => *color,
            PatternKind::Stripe(a, b) => alternate(x.floor(), a, b, local),
            PatternKind::Ring(a, b) => alternate(x.hypot(z).floor(), a, b, local),
            PatternKind::Checkered(a, b) => {
                alternate(x.floor() + y.floor() + z.floor(), a, b, local)
            }
            PatternKind::Gradient(a, b) => interpolate(x, a, b, local),
            PatternKind::RadialGradient(a, b) => interpolate(x.hypot(z), a, b, local),
            PatternKind::Blend(mode, a, b) => mode.apply(a.color_at(local), b.color_at(local)),
        }
    }
}

impl From<Color> for Pattern {
    fn from(color: Color) -> Self {
        Pattern::solid(color)
    }
}

fn boxed(pattern: impl Into<Pattern>) -> Box<Pattern> {
    Box::new(pattern.into())
}

/// Pick `a` on even `index`, `b` on odd. Negative indices alternate too.
fn alternate(index: f64, a: &Pattern, b: &Pattern, point: Vector4) -> Color {
    if index.rem_euclid(2.0) == 0.0 {
        a.color_at(point)
    } else {
        b.color_at(point)
    }
}

fn interpolate(key: f64, a: &Pattern, b: &Pattern, point: Vector4) -> Color {
    let fraction = key - key.floor();
    a.color_at(point).lerp(b.color_at(point), fraction)
}
