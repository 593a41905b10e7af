//! Portfolio content-specific error types.

use std::path::PathBuf;

/// Errors that can occur while loading portfolio content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Failed to read a content file
    #[error("Failed to read content from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to deserialize content
    #[error("Failed to deserialize content: {0}")]
    DeserializationFailed(String),

    /// Content parsed but is unusable
    #[error("Invalid content: {0}")]
    Invalid(String),
}
