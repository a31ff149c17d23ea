//! Effective modification time of a subtree.

use std::collections::HashMap;

use crate::models::{Folder, Millis, Node};

/// Most recent modification anywhere below `node`.
///
/// Files return their own mtime. Folders return the maximum over their
/// children, recursively; an empty folder returns `0`, which callers treat
/// as "no recency signal" rather than the epoch.
pub fn effective_mtime(node: &Node) -> Millis {
    match node {
        Node::File(file) => file.mtime,
        Node::Folder(folder) => folder_mtime(folder),
    }
}

fn folder_mtime(folder: &Folder) -> Millis {
    folder
        .children
        .iter()
        .map(effective_mtime)
        .max()
        .unwrap_or(0)
}

/// Per-render memo of folder aggregates, keyed by folder path.
///
/// Results equal [`effective_mtime`]; the memo only avoids re-walking a
/// subtree that several comparisons or tiles ask about. Drop it when the
/// tree changes.
#[derive(Debug, Default)]
pub struct MtimeMemo {
    folders: HashMap<String, Millis>,
}

impl MtimeMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, node: &Node) -> Millis {
        match node {
            Node::File(file) => file.mtime,
            Node::Folder(folder) => self.folder(folder),
        }
    }

    fn folder(&mut self, folder: &Folder) -> Millis {
        if let Some(&cached) = self.folders.get(&folder.path) {
            return cached;
        }
        let value = folder
            .children
            .iter()
            .map(|child| self.get(child))
            .max()
            .unwrap_or(0);
        self.folders.insert(folder.path.clone(), value);
        value
    }
}
