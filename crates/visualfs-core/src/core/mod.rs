//! Navigation-and-listing logic.
//!
//! This module provides:
//! - [`Navigator`] the engine a host drives with navigation events
//! - [`resolve_current_folder`] path resolution with recovery to the root
//! - [`effective_mtime`] and [`order`] for recency and alphabetical ordering
//! - [`classify`] and [`preview`] for bounded file previews
//! - [`VirtualTree`] an in-memory tree built from a JSON manifest

pub mod error;
mod filesystem;
mod grid;
mod mtime;
mod navigator;
pub mod preview;
pub mod provider;
mod resolver;
mod sorter;

pub use filesystem::{
    normalize_path, DirectoryEntry, FileEntry, Manifest, TreeBuilder, VirtualTree,
};
pub use grid::{
    ChildSummary, FileTile, FolderTile, GridEntry, GridView, PreviewSlot, PreviewTicket,
    PreviewUpdate,
};
pub use mtime::{effective_mtime, MtimeMemo};
pub use navigator::{Activation, Navigator};
pub use preview::{classify, preview};
pub use provider::{ContentFuture, FileTreeProvider, NotificationSink, RichTextRenderer};
pub use resolver::resolve_current_folder;
pub use sorter::{compare_names, order, order_with};
