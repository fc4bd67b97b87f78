//! Error Types
//!
//! All errors are synchronous and non-retryable; they indicate malformed
//! input, not transient conditions.

use thiserror::Error;

/// Errors raised when building or querying a similarity index
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    /// Vector length does not match the index dimensionality
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The same label appears more than once during build
    #[error("duplicate label: {0}")]
    DuplicateLabel(String),

    /// Query against an index with zero entries
    #[error("index is empty")]
    EmptyIndex,

    /// Label lookup against an index that does not contain it
    #[error("unknown label: {0}")]
    UnknownLabel(String),
}
