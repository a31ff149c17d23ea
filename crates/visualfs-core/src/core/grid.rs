//! Renderable grid composed from a resolved folder.

use tracing::debug;

use crate::config::{EMPTY_FOLDER_TEXT, FILE_ICON, FOLDER_ICON};
use crate::models::{Breadcrumb, Millis, PreviewResult, PreviewStrategy};

/// One line of a folder tile's contents list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildSummary {
    pub name: String,
    pub is_folder: bool,
}

impl ChildSummary {
    /// Icon-prefixed label (e.g., "📄 todo.txt").
    pub fn label(&self) -> String {
        let icon = if self.is_folder { FOLDER_ICON } else { FILE_ICON };
        format!("{} {}", icon, self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderTile {
    pub name: String,
    pub path: String,
    /// Aggregate mtime; `0` when the subtree holds no files
    pub mtime: Millis,
    /// Relative-age label, absent when there is no recency signal
    pub age: Option<String>,
    /// Immediate children, recency-sorted (empty when disabled)
    pub contents: Vec<ChildSummary>,
}

/// Preview state of a file tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewSlot {
    /// Waiting on a preview task
    Pending(PreviewStrategy),
    Ready(PreviewResult),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileTile {
    pub name: String,
    pub path: String,
    pub extension: String,
    pub mtime: Millis,
    pub size: Option<u64>,
    pub age: String,
    pub preview: PreviewSlot,
}

/// A single tile in the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridEntry {
    Folder(FolderTile),
    File(FileTile),
}

impl GridEntry {
    pub fn name(&self) -> &str {
        match self {
            GridEntry::Folder(tile) => &tile.name,
            GridEntry::File(tile) => &tile.name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            GridEntry::Folder(tile) => &tile.path,
            GridEntry::File(tile) => &tile.path,
        }
    }
}

/// Identifies the view a preview task was launched for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewTicket {
    pub generation: u64,
    pub path: String,
}

/// A finished preview task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewUpdate {
    pub ticket: PreviewTicket,
    pub result: PreviewResult,
}

/// Snapshot of one folder, ready for a presenter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridView {
    /// Navigation generation this view was rendered at
    pub generation: u64,
    /// Absolute display path (e.g., `/notes/daily`)
    pub path: String,
    /// Whether a back/up control applies
    pub show_back: bool,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub entries: Vec<GridEntry>,
}

impl GridView {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty-state text when the folder has no children.
    pub fn empty_text(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_FOLDER_TEXT)
    }

    /// Tickets for file tiles still waiting on a preview.
    pub fn pending(
        &self,
    ) -> impl Iterator<Item = (PreviewTicket, &FileTile, PreviewStrategy)> + '_ {
        self.entries.iter().filter_map(move |entry| match entry {
            GridEntry::File(tile) => match tile.preview {
                PreviewSlot::Pending(strategy) => Some((
                    PreviewTicket {
                        generation: self.generation,
                        path: tile.path.clone(),
                    },
                    tile,
                    strategy,
                )),
                PreviewSlot::Ready(_) => None,
            },
            GridEntry::Folder(_) => None,
        })
    }

    /// Store a finished preview if it belongs to this view.
    ///
    /// `current_generation` is the navigator's generation at delivery time.
    /// Updates from an earlier or later navigation, or for paths not shown
    /// here, are discarded and `false` is returned.
    pub fn apply(&mut self, update: PreviewUpdate, current_generation: u64) -> bool {
        let ticket = &update.ticket;
        if ticket.generation != current_generation || ticket.generation != self.generation {
            debug!(
                path = %ticket.path,
                ticket = ticket.generation,
                current = current_generation,
                "Discarding stale preview"
            );
            return false;
        }

        let tile = self.entries.iter_mut().find_map(|entry| match entry {
            GridEntry::File(tile) if tile.path == ticket.path => Some(tile),
            _ => None,
        });

        match tile {
            Some(tile) => {
                tile.preview = PreviewSlot::Ready(update.result);
                true
            }
            None => false,
        }
    }
}
