//! Errors raised while assembling a scene.

use thiserror::Error;
use tracer_math::MathError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("math error: {0}")]
    Math(#[from] MathError),

    #[error("no hull at index {0}")]
    UnknownHull(usize),
}

pub type SceneResult<T> = Result<T, SceneError>;
