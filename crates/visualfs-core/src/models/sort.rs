//! Child ordering policies.

use serde::{Deserialize, Serialize};

/// How a folder's children are ordered in the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum SortPolicy {
    /// Folders and files intermixed, most recently modified first
    #[default]
    #[serde(rename = "recency")]
    RecencyDescending,
    /// Folders first, then files, each by name
    #[serde(rename = "alphabetical")]
    AlphabeticalFoldersFirst,
}
