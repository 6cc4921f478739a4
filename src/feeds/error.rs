//! Error types for playlist feeds

use std::path::PathBuf;
use thiserror::Error;

/// Result type for feed operations
pub type Result<T> = std::result::Result<T, FeedsError>;

#[derive(Error, Debug)]
pub enum FeedsError {
    /// A configured format name is not one we know how to write
    #[error("Unknown feed format '{0}' (expected one of: m3u, m3u_multi, m3u_session, link, echo)")]
    UnknownFormat(String),

    /// Config file could not be read or parsed
    #[error("Failed to load config from {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Directory creation, playlist write or link failure
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Symlinks cannot be created on this platform
    #[error("Cannot link {0:?}: symlinks are not supported on this platform")]
    LinkUnsupported(PathBuf),
}

impl FeedsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
