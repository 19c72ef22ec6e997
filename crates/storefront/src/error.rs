//! Unified error handling for storefront state operations.
//!
//! Cart mutations are the only fallible surface: they re-serialize the full
//! cart and overwrite the durable slot before returning, and a failure there
//! propagates to the caller. Invalid *user input* is never an error; it is
//! coerced at the boundary (bad quantities become 1, corrupt slot content
//! hydrates as an empty cart).

use thiserror::Error;

use crate::storage::StorageError;

/// Application-level error type for storefront state.
#[derive(Debug, Error)]
pub enum AppError {
    /// Durable slot read or write failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Cart state could not be serialized for persistence.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
