use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or persisting the content document.
#[derive(Debug, Error)]
pub enum ContentStoreError {
    /// The persisted document exists but could not be read.
    #[error("Failed to read content file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The persisted document is not a valid content document.
    #[error("Content file {} is not a valid content document: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document could not be written to disk.
    #[error("Failed to write content file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The background task persisting the document panicked.
    #[error("Content store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for content store operations.
pub type Result<T> = std::result::Result<T, ContentStoreError>;
