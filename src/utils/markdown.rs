//! Markdown rendering for previews.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection.

use comrak::{markdown_to_html, Options};
use visualfs_core::core::error::RenderError;
use visualfs_core::RichTextRenderer;

use crate::config::MAX_RENDER_INPUT_BYTES;

/// `RichTextRenderer` backed by comrak, sanitized with ammonia.
///
/// Supports extended markdown syntax including:
/// - Strikethrough (`~~text~~`)
/// - Tables
/// - Footnotes
#[derive(Debug, Clone)]
pub struct ComrakRenderer {
    max_input_bytes: usize,
}

impl ComrakRenderer {
    pub fn new(max_input_bytes: usize) -> Self {
        Self { max_input_bytes }
    }
}

impl Default for ComrakRenderer {
    fn default() -> Self {
        Self::new(MAX_RENDER_INPUT_BYTES)
    }
}

impl RichTextRenderer for ComrakRenderer {
    fn render(&self, content: &str, source_path: &str) -> Result<String, RenderError> {
        if content.len() > self.max_input_bytes {
            return Err(RenderError::new(
                source_path,
                format!(
                    "document is {} bytes, limit is {}",
                    content.len(),
                    self.max_input_bytes
                ),
            ));
        }

        let mut options = Options::default();
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.footnotes = true;

        let html_output = markdown_to_html(content, &options);

        // Sanitize HTML to prevent XSS attacks
        Ok(ammonia::clean(&html_output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_heading_and_table() {
        let html = ComrakRenderer::default()
            .render("# Title\n\n| a | b |\n|---|---|\n| 1 | 2 |\n", "t.md")
            .unwrap();
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_strips_script() {
        let html = ComrakRenderer::default()
            .render("hi <script>alert(1)</script>", "x.md")
            .unwrap();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_oversized_input_fails() {
        let err = ComrakRenderer::new(4).render("# too long", "big.md").unwrap_err();
        assert_eq!(err.source_path, "big.md");
    }
}
