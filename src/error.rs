//! Error types shared by the key helpers and the storage client

use thiserror::Error;

/// Error type reported by storage backends and URL signers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias used at the backend boundary.
pub type BackendResult<T> = Result<T, BoxError>;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Whatever the object store or signer reported, passed through as-is.
    #[error(transparent)]
    Backend(#[from] BoxError),
}
