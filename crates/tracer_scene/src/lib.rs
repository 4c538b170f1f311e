//! Tracer scene - hulls, patterns, Phong lighting and the world graph.
//!
//! This crate provides:
//!
//! - **Geometry**: [`Ray`], the [`Shape`] capability trait with [`Sphere`]
//!   and [`Plane`], and [`Hull`] which places a shape in the world
//! - **Shading**: [`Material`], [`Pattern`] trees and a point [`Light`]
//! - **Visibility**: [`Intersection`], [`Intersections`] and
//!   [`Computations`]
//! - **Scene graph**: [`World`], which resolves rays to colors
//!
//! # Example
//!
//! ```
//! use tracer_math::{Color, Vector4};
//! use tracer_scene::{Ray, World};
//!
//! let world = World::default_scene();
//! let ray = Ray::new(Vector4::point(0.0, 0.0, -5.0), Vector4::vector(0.0, 0.0, 1.0));
//! let color = world.color_at(&ray);
//! assert_ne!(color, Color::BLACK);
//! ```

mod error;
mod hull;
mod intersection;
mod light;
mod material;
mod pattern;
mod ray;
mod shape;
mod world;

pub use error::{SceneError, SceneResult};
pub use hull::Hull;
pub use intersection::{Computations, Intersection, Intersections};
pub use light::Light;
pub use material::Material;
pub use pattern::{BlendMode, Pattern, PatternKind};
pub use ray::Ray;
pub use shape::{Plane, Shape, Sphere};
pub use world::World;

/// Re-export the math types used throughout the scene API
pub use tracer_math::{Color, Matrix4, Vector4, EPSILON};
