//! Errors surfaced by the command-line host.
//!
//! Preview and resolution problems never reach this type; the engine
//! degrades those in place. Only setup failures (config, logging, loading
//! the tree) and invalid navigation requests end the process.

use std::path::PathBuf;

use thiserror::Error;
use visualfs_core::core::error::{ContentError, ManifestError, NavigationError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error("failed to scan directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("logging setup failed: {0}")]
    Logging(String),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("no entry named {0} in this folder")]
    NoSuchEntry(String),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
