//! Collaborator contracts the engine consumes.
//!
//! The host owns the file store, the markdown renderer and the notice
//! surface; the [`Navigator`](super::Navigator) receives them at
//! construction.

use futures::future::BoxFuture;

use super::error::{ContentError, RenderError};
use crate::models::{File, Folder, Node};

/// Object-safe boxed future returned by [`FileTreeProvider::read_content`].
///
/// It owns everything it needs, so preview tasks can outlive the borrow of
/// the provider.
pub type ContentFuture = BoxFuture<'static, Result<String, ContentError>>;

/// Read-only access to a rooted, acyclic file tree.
pub trait FileTreeProvider: Send + Sync {
    /// The root folder.
    fn root(&self) -> &Folder;

    /// Look up a node by root-relative path (no leading slash).
    ///
    /// The root itself is reached through [`root`](Self::root); an empty
    /// path yields `None`.
    fn lookup(&self, path: &str) -> Option<&Node>;

    /// Read a file's full text content.
    fn read_content(&self, file: &File) -> ContentFuture;
}

/// Markdown renderer.
pub trait RichTextRenderer: Send + Sync {
    /// Render `content` for display; `source_path` gives context for
    /// relative links and embeds.
    fn render(&self, content: &str, source_path: &str) -> Result<String, RenderError>;
}

/// Transient user-visible notices.
pub trait NotificationSink: Send + Sync {
    fn show(&self, message: &str);
}
