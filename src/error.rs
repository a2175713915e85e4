//! Error types for directory tree hashing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while walking and reading a directory tree
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("Failed to list directory {path:?}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Library-surface errors (configuration, logging setup, tree building)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<walkdir::Error> for TreeError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        let source = match err.into_io_error() {
            Some(io) => io,
            None => std::io::Error::other("filesystem loop detected"),
        };
        TreeError::Traversal { path, source }
    }
}
