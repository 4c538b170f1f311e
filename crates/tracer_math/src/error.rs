//! Error type shared by the math primitives.

use thiserror::Error;

/// Errors raised by tuple, color and matrix operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("matrix is singular and has no inverse")]
    SingularMatrix,

    #[error("cannot normalize a zero-magnitude vector")]
    ZeroMagnitude,
}

pub type MathResult<T> = Result<T, MathError>;
