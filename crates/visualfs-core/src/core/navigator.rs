//! The navigation engine driven by a host view.
//!
//! A [`Navigator`] owns one view's [`NavigationState`] and the collaborators
//! it was built with. Navigation handlers run to completion; only preview
//! generation suspends, and its results are tagged with the generation they
//! were launched at so a late result cannot land in a newer view.

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::FutureExt;
use tracing::debug;

use super::error::NavigationError;
use super::grid::{
    ChildSummary, FileTile, FolderTile, GridEntry, GridView, PreviewSlot, PreviewUpdate,
};
use super::mtime::MtimeMemo;
use super::preview::{classify, generic_label, preview};
use super::provider::{FileTreeProvider, NotificationSink, RichTextRenderer};
use super::resolver::resolve_current_folder;
use super::sorter::{order, order_with};
use crate::config::ViewConfig;
use crate::models::{
    Breadcrumb, File, Millis, NavigationState, Node, PreviewResult, PreviewStrategy, SortPolicy,
};
use crate::utils::format::format_age;

/// What a host should do after a tile was activated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The navigator moved into the folder; render again
    Navigated,
    /// Open the file at this root-relative path
    OpenFile(String),
}

/// Navigation-and-listing engine for one view instance.
pub struct Navigator {
    provider: Arc<dyn FileTreeProvider>,
    renderer: Arc<dyn RichTextRenderer>,
    notifier: Arc<dyn NotificationSink>,
    config: ViewConfig,
    state: NavigationState,
}

impl Navigator {
    /// Creates a navigator positioned at the root.
    pub fn new(
        provider: Arc<dyn FileTreeProvider>,
        renderer: Arc<dyn RichTextRenderer>,
        notifier: Arc<dyn NotificationSink>,
        config: ViewConfig,
    ) -> Self {
        Self {
            provider,
            renderer,
            notifier,
            config,
            state: NavigationState::new(),
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn current_path(&self) -> &str {
        self.state.current_path()
    }

    pub fn generation(&self) -> u64 {
        self.state.generation()
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.state.breadcrumbs()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move into the folder at a root-relative path.
    pub fn navigate_into(&mut self, path: &str) {
        self.state.navigate_into(path);
        debug!(path = %self.state.current_path(), "Navigate into");
    }

    /// Go up one level.
    pub fn navigate_up(&mut self) {
        self.state.navigate_up();
        debug!(path = %self.state.current_path(), "Navigate up");
    }

    /// Return to the root.
    pub fn navigate_root(&mut self) {
        self.state.reset_to_root();
        debug!("Navigate to root");
    }

    /// Jump to the breadcrumb at `index`.
    pub fn jump_to_breadcrumb(&mut self, index: usize) -> Result<(), NavigationError> {
        let crumbs = self.state.breadcrumbs();
        let crumb = crumbs
            .get(index)
            .ok_or(NavigationError::BreadcrumbOutOfRange {
                index,
                len: crumbs.len(),
            })?;
        self.state.jump_to(&crumb.path);
        debug!(path = %crumb.path, "Jump to breadcrumb");
        Ok(())
    }

    /// Handle a click on a tile.
    pub fn activate(&mut self, entry: &GridEntry) -> Activation {
        match entry {
            GridEntry::Folder(tile) => {
                self.navigate_into(&tile.path);
                Activation::Navigated
            }
            GridEntry::File(tile) => Activation::OpenFile(tile.path.clone()),
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the current location using the wall clock.
    pub fn render(&mut self) -> GridView {
        self.render_at(chrono::Utc::now().timestamp_millis())
    }

    /// Render the current location, computing ages relative to `now`.
    ///
    /// An invalid location is recovered to the root before anything is
    /// listed. File tiles that need content start out pending; drive
    /// [`previews`](Self::previews) to fill them.
    pub fn render_at(&mut self, now: Millis) -> GridView {
        let provider = Arc::clone(&self.provider);
        let folder =
            resolve_current_folder(&mut self.state, provider.as_ref(), self.notifier.as_ref());

        let mut memo = MtimeMemo::new();
        let entries = order_with(&folder.children, self.config.sort_policy, &mut memo)
            .into_iter()
            .map(|node| self.tile(node, now, &mut memo))
            .collect();

        GridView {
            generation: self.state.generation(),
            path: self.state.current_path().to_string(),
            show_back: !self.state.is_root(),
            breadcrumbs: self.state.breadcrumbs(),
            entries,
        }
    }

    fn tile(&self, node: &Node, now: Millis, memo: &mut MtimeMemo) -> GridEntry {
        match node {
            Node::Folder(folder) => {
                let mtime = memo.get(node);
                let contents = if self.config.folder_contents_preview {
                    order(&folder.children, SortPolicy::RecencyDescending)
                        .into_iter()
                        .map(|child| ChildSummary {
                            name: child.name().to_string(),
                            is_folder: child.is_folder(),
                        })
                        .collect()
                } else {
                    Vec::new()
                };

                GridEntry::Folder(FolderTile {
                    name: folder.name.clone(),
                    path: folder.path.clone(),
                    mtime,
                    age: (mtime > 0).then(|| format_age(mtime, now)),
                    contents,
                })
            }
            Node::File(file) => {
                let preview = match classify(&file.extension, &self.config) {
                    PreviewStrategy::GenericLabel => {
                        PreviewSlot::Ready(PreviewResult::Label(generic_label(&file.extension)))
                    }
                    strategy => PreviewSlot::Pending(strategy),
                };

                GridEntry::File(FileTile {
                    name: file.name.clone(),
                    path: file.path.clone(),
                    extension: file.extension.clone(),
                    mtime: file.mtime,
                    size: file.size,
                    age: format_age(file.mtime, now),
                    preview,
                })
            }
        }
    }

    // =========================================================================
    // Previews
    // =========================================================================

    /// Launch one independent preview task per pending file tile.
    ///
    /// Tasks complete in any order. Feed each result to
    /// [`apply_preview`](Self::apply_preview), which drops results that no
    /// longer match the current navigation.
    pub fn previews(
        &self,
        view: &GridView,
    ) -> FuturesUnordered<BoxFuture<'static, PreviewUpdate>> {
        view.pending()
            .map(|(ticket, tile, strategy)| {
                // Taken from the tile so a file removed since the render
                // still gets a task; its read then fails to Unavailable.
                let file = File {
                    name: tile.name.clone(),
                    path: tile.path.clone(),
                    extension: tile.extension.clone(),
                    mtime: tile.mtime,
                    size: tile.size,
                };
                let provider = Arc::clone(&self.provider);
                let renderer = Arc::clone(&self.renderer);
                let max_length = self.config.max_preview_length;

                async move {
                    let result = preview(
                        &file,
                        strategy,
                        provider.as_ref(),
                        renderer.as_ref(),
                        max_length,
                    )
                    .await;
                    PreviewUpdate { ticket, result }
                }
                .boxed()
            })
            .collect()
    }

    /// Apply a finished preview to `view` if it is still current.
    pub fn apply_preview(&self, view: &mut GridView, update: PreviewUpdate) -> bool {
        view.apply(update, self.state.generation())
    }
}
