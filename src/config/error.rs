//! Configuration-specific error types.

use std::path::PathBuf;

/// Errors raised while locating, reading or writing `config.yml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `save` was called before `load` picked a file
    #[error("Configuration has not been loaded")]
    NotLoaded,

    /// No home directory to put the default configuration directory in
    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    #[error("Failed to create configuration directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read configuration {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but is not valid configuration YAML
    #[error("Invalid configuration in {path}: {message}")]
    DeserializationFailed { path: PathBuf, message: String },

    #[error("Failed to serialize configuration: {0}")]
    SerializationFailed(String),

    #[error("Failed to save configuration to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// `content_file` names a file that does not exist
    #[error("Content file {0} does not exist")]
    ContentFileMissing(PathBuf),
}
