//! Error types for movierec-core.

use thiserror::Error;

use crate::config::ConfigError;

/// Recommendation error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Target user id is not a row of the user-item matrix.
    #[error("Unknown user: {0} is not a row of the user-item matrix")]
    UnknownUser(u64),

    /// Display name is not present in the name index.
    #[error("User not found: no user named '{0}'")]
    UserNotFound(String),

    /// `k` or `top_n` outside their valid domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Structural inconsistency between matrices.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected size.
        expected: usize,
        /// Actual size.
        actual: usize,
    },

    /// Row or column ids are not unique.
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    /// No ratings remained after loading and joining.
    #[error("Empty dataset: no ratings to build a user-item matrix from")]
    EmptyDataset,

    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for recommendation operations.
pub type Result<T> = std::result::Result<T, Error>;
