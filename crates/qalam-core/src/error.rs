//! Error type for the indexing core.
//!
//! Only caller precondition violations are errors. Empty text, empty corpora
//! and empty document collections are legal input and produce empty or zero
//! results instead.

use thiserror::Error;

/// Failures surfaced by `qalam-core` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The caller violated a documented precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, IndexError>;
