//! Error types for the engine and its collaborators.
//!
//! - [`ContentError`] - File content reads
//! - [`RenderError`] - Rich-text rendering
//! - [`NavigationError`] - Navigation requests that cannot be honored
//! - [`ManifestError`] - Building a tree from a manifest

use thiserror::Error;

/// Failure to read a file's content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The file no longer exists in the store
    #[error("file not found: {0}")]
    NotFound(String),
    /// The store holds no content for this file
    #[error("no content available for {0}")]
    Missing(String),
    /// Underlying read failed (permissions, I/O, encoding)
    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },
}

/// Failure of the rich-text renderer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("render failed for {source_path}: {reason}")]
pub struct RenderError {
    pub source_path: String,
    pub reason: String,
}

impl RenderError {
    pub fn new(source_path: &str, reason: impl Into<String>) -> Self {
        Self {
            source_path: source_path.to_string(),
            reason: reason.into(),
        }
    }
}

/// Navigation requests that cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("breadcrumb {index} out of range ({len} segments)")]
    BreadcrumbOutOfRange { index: usize, len: usize },
}

/// Failure to load a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
