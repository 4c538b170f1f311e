//! Errors raised while configuring or running a render.

use thiserror::Error;
use tracer_math::MathError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("math error: {0}")]
    Math(#[from] MathError),

    #[error("failed to build render thread pool: {0}")]
    ThreadPool(String),

    #[error("invalid render config: {0}")]
    InvalidConfig(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
