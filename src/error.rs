//! Error types shared by every reducer builder and the [`Runner`](crate::Runner).
//!
//! Configuration mistakes are detected while a reducer (or runner) is being
//! built, never halfway through a reduction: once a reducer exists, finishing
//! it cannot fail.

use thiserror::Error;

/// Errors raised while configuring or executing a reduction.
#[derive(Error, Debug)]
pub enum ReduceError {
    /// A builder or runner received an argument outside its valid domain
    /// (e.g. a tile count of zero).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The parallel runner could not set up its worker pool.
    #[error("execution error: {0}")]
    Execution(String),

    /// A runner configuration document could not be parsed.
    #[error("invalid runner configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias using [`ReduceError`].
pub type Result<T> = std::result::Result<T, ReduceError>;

impl ReduceError {
    /// Shorthand for [`ReduceError::InvalidArgument`].
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
