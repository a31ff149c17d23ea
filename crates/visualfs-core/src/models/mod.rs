//! Data models for the browsed hierarchy and the grid built from it.
//!
//! Contains domain types for:
//! - [`Node`], [`Folder`], [`File`] - The file tree
//! - [`NavigationState`], [`Breadcrumb`] - Current location
//! - [`SortPolicy`] - Child ordering policies
//! - [`PreviewStrategy`], [`PreviewResult`] - File content previews

mod navigation;
mod node;
mod preview;
mod sort;

pub use navigation::{Breadcrumb, NavigationState};
pub use node::{File, Folder, Millis, Node};
pub use preview::{PreviewResult, PreviewStrategy};
pub use sort::SortPolicy;
