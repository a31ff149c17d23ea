//! View configuration.
//!
//! Centralizes the constants and tunables used by the engine. Hosts
//! deserialize [`ViewConfig`] from their own config files; every field has
//! a default so partial tables work.

use serde::Deserialize;

use crate::models::SortPolicy;

// =============================================================================
// Display Strings
// =============================================================================

/// Marker appended to truncated text previews.
pub const ELLIPSIS: &str = "...";

/// Shown when a file's content cannot be read.
pub const PREVIEW_UNAVAILABLE: &str = "Preview unavailable";

/// Prefix of the notice emitted when the current path does not resolve.
pub const FOLDER_NOT_FOUND: &str = "Folder not found: ";

/// Empty-state text for a folder with no children.
pub const EMPTY_FOLDER_TEXT: &str = "This folder is empty.";

/// Age label for items modified less than a day ago.
pub const TODAY_LABEL: &str = "Today";

// =============================================================================
// Folder Tiles
// =============================================================================

/// Icon prefix for folders in a folder tile's contents list.
pub const FOLDER_ICON: &str = "🗂️";

/// Icon prefix for files in a folder tile's contents list.
pub const FILE_ICON: &str = "📄";

// =============================================================================
// Time Constants
// =============================================================================

/// Milliseconds per day for age labels.
pub const MS_PER_DAY: i64 = 86_400_000;

// =============================================================================
// Tunables
// =============================================================================

/// Default maximum number of characters in a text preview.
pub const DEFAULT_MAX_PREVIEW_LENGTH: usize = 500;

/// Extensions previewed as plain text by default.
pub const DEFAULT_TEXT_EXTENSIONS: &[&str] = &["txt", "js", "css", "html", "json"];

/// Engine settings for one view.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Maximum characters kept from a text preview before the ellipsis
    pub max_preview_length: usize,
    /// Extensions (lower-case, no dot) previewed as plain text
    pub text_extensions: Vec<String>,
    /// Ordering of a folder's children
    pub sort_policy: SortPolicy,
    /// List each folder's immediate children inside its tile
    pub folder_contents_preview: bool,
}

impl ViewConfig {
    /// Check if an extension is in the plain-text set.
    pub fn is_text_extension(&self, extension: &str) -> bool {
        self.text_extensions.iter().any(|e| e == extension)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            max_preview_length: DEFAULT_MAX_PREVIEW_LENGTH,
            text_extensions: DEFAULT_TEXT_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            sort_policy: SortPolicy::default(),
            folder_contents_preview: true,
        }
    }
}
