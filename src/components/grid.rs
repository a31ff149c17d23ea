//! Plain-text rendering of a [`GridView`].
//!
//! One block per tile: a header line with icon, name, age and size,
//! followed by an indented body (a folder's contents or a file's preview).

use std::sync::LazyLock;

use regex::Regex;
use visualfs_core::config::{FILE_ICON, FOLDER_ICON};
use visualfs_core::core::{FileTile, FolderTile, GridEntry, PreviewSlot};
use visualfs_core::utils::format::format_size;
use visualfs_core::GridView;

use super::pathbar::path_bar;
use crate::config::TILE_PREVIEW_LINES;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

const INDENT: &str = "    ";
const BACK_HINT: &str = "..  (--up)";
const LOADING: &str = "…";

/// Render the whole view, path bar first.
pub fn render_grid(view: &GridView) -> String {
    let mut out = String::new();
    push_line(&mut out, &path_bar(view));
    if view.show_back {
        push_line(&mut out, BACK_HINT);
    }
    out.push('\n');

    if let Some(text) = view.empty_text() {
        push_line(&mut out, text);
        return out;
    }

    for entry in &view.entries {
        match entry {
            GridEntry::Folder(tile) => folder_block(&mut out, tile),
            GridEntry::File(tile) => file_block(&mut out, tile),
        }
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn folder_block(out: &mut String, tile: &FolderTile) {
    let header = match &tile.age {
        Some(age) => format!("{} {}/  {}", FOLDER_ICON, tile.name, age),
        None => format!("{} {}/", FOLDER_ICON, tile.name),
    };
    push_line(out, &header);

    for child in &tile.contents {
        push_line(out, &format!("{}{}", INDENT, child.label()));
    }
}

fn file_block(out: &mut String, tile: &FileTile) {
    push_line(
        out,
        &format!(
            "{} {}  {}  {}",
            FILE_ICON,
            tile.name,
            tile.age,
            format_size(tile.size)
        ),
    );

    let body = match &tile.preview {
        PreviewSlot::Pending(_) => LOADING.to_string(),
        PreviewSlot::Ready(result) if result.is_rendered() => html_to_text(result.display_text()),
        PreviewSlot::Ready(result) => result.display_text().to_string(),
    };

    for line in body
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .take(TILE_PREVIEW_LINES)
    {
        push_line(out, &format!("{}{}", INDENT, line));
    }
}

/// Strip tags from sanitized HTML and decode the entities it escapes.
fn html_to_text(html: &str) -> String {
    TAG.replace_all(html, "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
