//! Error types and result types for document repository operations.
//!
//! The repository operations themselves (`save`, `search`, `find_by_id`) are
//! total and never fail; only the serialization surface is fallible. Use
//! [`StoreResult<T>`] as the return type for those operations.

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents the errors that can occur on the repository's fallible surface.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Serialization/deserialization error when converting documents to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The caller handed the repository a structurally invalid value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// A specialized `Result` type for document repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<SerdeJsonError> for StoreError {
    fn from(err: SerdeJsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
