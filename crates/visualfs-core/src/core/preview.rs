//! File preview classification and generation.
//!
//! Previews degrade instead of failing. A content read failure yields
//! [`PreviewResult::Unavailable`]; a markdown render failure yields the
//! raw markdown. The two layers are handled separately.

use tracing::warn;

use super::provider::{FileTreeProvider, RichTextRenderer};
use crate::config::{ELLIPSIS, ViewConfig};
use crate::models::{File, PreviewResult, PreviewStrategy};
use crate::utils::format::display_name;

/// Pick the preview strategy for a file extension.
pub fn classify(extension: &str, config: &ViewConfig) -> PreviewStrategy {
    if extension == "md" {
        PreviewStrategy::MarkdownPreview
    } else if config.is_text_extension(extension) {
        PreviewStrategy::PlainTextPreview
    } else {
        PreviewStrategy::GenericLabel
    }
}

/// Label for files without a content preview (e.g., "PDF file").
pub fn generic_label(extension: &str) -> String {
    if extension.is_empty() {
        "file".to_string()
    } else {
        format!("{} file", extension.to_uppercase())
    }
}

/// Produce the preview for `file` under `strategy`.
pub async fn preview(
    file: &File,
    strategy: PreviewStrategy,
    reader: &dyn FileTreeProvider,
    renderer: &dyn RichTextRenderer,
    max_length: usize,
) -> PreviewResult {
    match strategy {
        PreviewStrategy::GenericLabel => PreviewResult::Label(generic_label(&file.extension)),
        PreviewStrategy::PlainTextPreview => match reader.read_content(file).await {
            Ok(content) => PreviewResult::Text(truncate_preview(&content, max_length)),
            Err(e) => {
                warn!(path = %file.path, error = %e, "Error getting file preview");
                PreviewResult::Unavailable
            }
        },
        PreviewStrategy::MarkdownPreview => match reader.read_content(file).await {
            Ok(content) => {
                let content = with_title(&content, display_name(&file.name));
                match renderer.render(&content, &file.path) {
                    Ok(html) => PreviewResult::Rendered(html),
                    Err(e) => {
                        warn!(path = %file.path, error = %e, "Markdown render error");
                        PreviewResult::RawMarkdown(content)
                    }
                }
            }
            Err(e) => {
                warn!(path = %file.path, error = %e, "Error getting file preview");
                PreviewResult::Unavailable
            }
        },
    }
}

/// Trim `content` and keep at most `max_length` characters.
///
/// The ellipsis is appended only when the trimmed content was longer.
pub fn truncate_preview(content: &str, max_length: usize) -> String {
    let trimmed = content.trim();
    match trimmed.char_indices().nth(max_length) {
        Some((cut, _)) => format!("{}{}", &trimmed[..cut], ELLIPSIS),
        None => trimmed.to_string(),
    }
}

/// Prepend a level-1 heading unless the content already starts with one.
pub fn with_title(content: &str, title: &str) -> String {
    if content.trim_start().starts_with("# ") {
        content.to_string()
    } else {
        format!("# {}\n\n{}", title, content)
    }
}
