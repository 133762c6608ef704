//! Error types for world construction and mutation

use thiserror::Error;

/// Errors raised by the simulation core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A construction parameter or input grid violates a precondition
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Coordinates outside the `size`×`size` grid
    #[error("coordinates ({x}, {y}) out of bounds for {size}x{size} world")]
    OutOfBounds { x: usize, y: usize, size: usize },
}

impl LifeError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        LifeError::InvalidArgument(message.into())
    }

    /// Whether this error is of the invalid-argument kind
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LifeError::InvalidArgument(_))
    }
}
