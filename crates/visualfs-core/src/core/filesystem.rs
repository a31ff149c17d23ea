use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{ContentError, ManifestError};
use super::provider::{ContentFuture, FileTreeProvider};
use crate::models::{File, Folder, Millis, Node};

// =============================================================================
// Manifest Types
// =============================================================================

/// Root manifest structure from manifest.json
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Manifest {
    /// File entries
    #[serde(default)]
    pub files: Vec<FileEntry>,
    /// Directories that must exist even when empty
    #[serde(default)]
    pub directories: Vec<DirectoryEntry>,
}

/// File entry from manifest.json
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FileEntry {
    /// File path (relative to the root)
    pub path: String,
    /// Last modification time (Unix milliseconds)
    pub modified: Millis,
    /// Inline text content, if the manifest carries it
    #[serde(default)]
    pub content: Option<String>,
}

/// Directory entry from manifest.json
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DirectoryEntry {
    pub path: String,
}

// =============================================================================
// TreeBuilder
// =============================================================================

/// Incrementally builds a [`Folder`] tree from root-relative paths.
///
/// Parent folders are created on demand. An insertion whose parent segment
/// is already a file is skipped.
#[derive(Clone, Debug, Default)]
pub struct TreeBuilder {
    root: Folder,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, creating missing parent folders.
    ///
    /// Returns `false` if the path was blocked by an existing file.
    pub fn insert_file(&mut self, file: File) -> bool {
        let parts: Vec<&str> = file.path.split('/').filter(|s| !s.is_empty()).collect();
        let Some((_, parents)) = parts.split_last() else {
            return false;
        };
        let Some(folder) = Self::ensure_path(&mut self.root, parents) else {
            warn!(path = %file.path, "Tree conflict: blocked by existing file");
            return false;
        };

        match folder.child_mut(&file.name) {
            Some(Node::Folder(_)) => {
                warn!(path = %file.path, "Tree conflict: folder exists at file path");
                false
            }
            Some(existing) => {
                *existing = Node::File(file);
                true
            }
            None => {
                folder.children.push(Node::File(file));
                true
            }
        }
    }

    /// Ensure a folder exists at the given path.
    pub fn ensure_folder(&mut self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let created = Self::ensure_path(&mut self.root, &parts).is_some();
        if !created {
            warn!(path, "Tree conflict: blocked by existing file");
        }
        created
    }

    /// Finish building and return the root folder.
    pub fn build(self) -> Folder {
        self.root
    }

    /// Walk `parts` from `root` iteratively, creating folders as needed.
    fn ensure_path<'a>(root: &'a mut Folder, parts: &[&str]) -> Option<&'a mut Folder> {
        let mut current = root;

        for part in parts {
            let path = if current.path.is_empty() {
                part.to_string()
            } else {
                format!("{}/{}", current.path, part)
            };

            let idx = match current.children.iter().position(|c| c.name() == *part) {
                Some(idx) => idx,
                None => {
                    current.children.push(Node::Folder(Folder::new(&path)));
                    current.children.len() - 1
                }
            };

            current = match &mut current.children[idx] {
                Node::Folder(folder) => folder,
                Node::File(_) => return None,
            };
        }

        Some(current)
    }
}

/// Normalize a path by resolving `.` and `..` components.
///
/// Returns a relative path (no leading or trailing slashes).
pub fn normalize_path(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/').filter(|s| !s.is_empty()) {
        match part {
            ".." => {
                parts.pop();
            }
            "." => {}
            _ => parts.push(part),
        }
    }

    parts.join("/")
}

// =============================================================================
// VirtualTree
// =============================================================================

/// In-memory file tree with inline content.
///
/// Stores files using relative paths from the root, e.g. `notes/todo.md`.
#[derive(Clone, Debug, Default)]
pub struct VirtualTree {
    root: Folder,
    contents: HashMap<String, String>,
}

impl VirtualTree {
    /// Create tree from manifest.
    ///
    /// Conflicting entries are skipped with a warning.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut builder = TreeBuilder::new();
        let mut contents = HashMap::new();

        for entry in &manifest.files {
            let file = File::new(&normalize_path(&entry.path), entry.modified);
            let path = file.path.clone();
            let size = entry.content.as_ref().map(|c| c.len() as u64);
            let file = match size {
                Some(size) => file.with_size(size),
                None => file,
            };

            if !builder.insert_file(file) {
                continue;
            }
            // A replacing entry owns the content slot, even when it has none
            match &entry.content {
                Some(content) => contents.insert(path, content.clone()),
                None => contents.remove(&path),
            };
        }

        // Ensure directories from manifest exist (even if empty)
        for dir in &manifest.directories {
            builder.ensure_folder(&normalize_path(&dir.path));
        }

        Self {
            root: builder.build(),
            contents,
        }
    }

    /// Parse a JSON manifest and build the tree.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Ok(Self::from_manifest(&manifest))
    }

    /// Create empty tree.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl FileTreeProvider for VirtualTree {
    fn root(&self) -> &Folder {
        &self.root
    }

    fn lookup(&self, path: &str) -> Option<&Node> {
        if path.split('/').all(|s| s.is_empty()) {
            return None;
        }
        self.root.descend(path)
    }

    fn read_content(&self, file: &File) -> ContentFuture {
        let result = match self.contents.get(&file.path) {
            Some(content) => Ok(content.clone()),
            None if self.root.descend(&file.path).is_none() => {
                Err(ContentError::NotFound(file.path.clone()))
            }
            None => Err(ContentError::Missing(file.path.clone())),
        };
        Box::pin(async move { result })
    }
}
