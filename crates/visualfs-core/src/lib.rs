//! Navigation-and-listing engine for a grid-style file browser.
//!
//! The crate turns a rooted file tree into an ordered grid of tiles:
//!
//! - [`core::Navigator`] owns the current location, resolves it to a folder and
//!   recovers to the root when the location went stale
//! - [`core::order`] sorts a folder's children under a [`models::SortPolicy`]
//! - [`core::effective_mtime`] aggregates modification time through a subtree
//! - [`core::preview`] classifies files and produces bounded previews
//!
//! Hosts plug in the file store, the markdown renderer and the notice surface
//! through the traits in [`core::provider`].

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use config::ViewConfig;
pub use core::{
    Activation, ContentFuture, FileTreeProvider, GridView, Navigator, NotificationSink,
    PreviewUpdate, RichTextRenderer, VirtualTree,
};
pub use models::{Breadcrumb, File, Folder, Node, PreviewResult, PreviewStrategy, SortPolicy};
