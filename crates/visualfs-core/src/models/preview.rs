//! File preview types.

use crate::config::PREVIEW_UNAVAILABLE;

/// Content-rendering policy selected for a file by its extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewStrategy {
    /// Rendered markdown with a guaranteed title line
    MarkdownPreview,
    /// Trimmed, length-bounded text excerpt
    PlainTextPreview,
    /// Extension label only, no content read
    GenericLabel,
}

/// Outcome of previewing one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewResult {
    /// Label for files without a content preview (e.g., "PDF file")
    Label(String),
    /// Plain text excerpt
    Text(String),
    /// Markdown rendered to HTML
    Rendered(String),
    /// Markdown source shown as-is because rendering failed
    RawMarkdown(String),
    /// Content could not be read
    Unavailable,
}

impl PreviewResult {
    /// Text to show in the tile.
    ///
    /// Rendered results yield the rendered surface; every other variant
    /// yields plain text, so a tile is never blank.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Label(text)
            | Self::Text(text)
            | Self::Rendered(text)
            | Self::RawMarkdown(text) => text,
            Self::Unavailable => PREVIEW_UNAVAILABLE,
        }
    }

    /// Check if this result is rich (rendered) content.
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }
}
