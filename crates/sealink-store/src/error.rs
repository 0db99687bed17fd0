//! Error types for the sealink-store crate

use thiserror::Error;

/// Result type alias using `StoreError`
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in a record store
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record exists with the given identifier
    #[error("record not found: {0}")]
    NotFound(String),

    /// Backend-specific failure
    #[error("storage backend error: {0}")]
    Backend(String),
}
