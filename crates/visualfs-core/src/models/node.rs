//! File tree nodes.

/// Milliseconds since the Unix epoch.
pub type Millis = i64;

// =============================================================================
// Nodes
// =============================================================================

/// A folder in the browsed hierarchy.
///
/// # Path Convention
///
/// - Root folder: empty string `""`
/// - Folder in root: `"notes"`
/// - Nested folder: `"notes/daily"`
/// - No leading or trailing slashes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Folder {
    /// Last path segment (empty for the root)
    pub name: String,
    /// Root-relative path
    pub path: String,
    /// Children in no particular order
    pub children: Vec<Node>,
}

/// A file with its stat metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    /// Last path segment, including the extension
    pub name: String,
    /// Root-relative path
    pub path: String,
    /// Lower-case extension without the dot (empty if none)
    pub extension: String,
    /// Last modification time
    pub mtime: Millis,
    /// Size in bytes, when the provider knows it
    pub size: Option<u64>,
}

/// Represents an entry in the browsed tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Folder(Folder),
    File(File),
}

impl Folder {
    /// Create an empty folder at `path`.
    pub fn new(path: &str) -> Self {
        Self {
            name: last_segment(path).to_string(),
            path: path.to_string(),
            children: Vec::new(),
        }
    }

    /// Create the root folder.
    pub fn root() -> Self {
        Self::default()
    }

    /// Check if this is the root folder.
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Find an immediate child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name() == name)
    }

    pub(crate) fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.iter_mut().find(|c| c.name() == name)
    }

    /// Walk a root-relative path below this folder.
    ///
    /// Empty segments are ignored, so `"a//b/"` resolves like `"a/b"`.
    pub fn descend(&self, path: &str) -> Option<&Node> {
        let mut segments = path.split('/').filter(|s| !s.is_empty()).peekable();
        let mut current = self;

        while let Some(segment) = segments.next() {
            let node = current.child(segment)?;
            if segments.peek().is_none() {
                return Some(node);
            }
            match node {
                Node::Folder(folder) => current = folder,
                Node::File(_) => return None,
            }
        }

        None
    }
}

impl File {
    /// Create a file at `path` with the given modification time.
    ///
    /// The extension is derived from the name.
    pub fn new(path: &str, mtime: Millis) -> Self {
        let name = last_segment(path).to_string();
        let extension = extension_of(&name);
        Self {
            name,
            path: path.to_string(),
            extension,
            mtime,
            size: None,
        }
    }

    /// Set the file size.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}

impl Node {
    /// Last path segment.
    pub fn name(&self) -> &str {
        match self {
            Node::Folder(folder) => &folder.name,
            Node::File(file) => &file.name,
        }
    }

    /// Root-relative path.
    pub fn path(&self) -> &str {
        match self {
            Node::Folder(folder) => &folder.path,
            Node::File(file) => &file.path,
        }
    }

    /// Check if this node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    /// Get the folder (folders only).
    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::File(_) => None,
        }
    }

    /// Get the file (files only).
    pub fn as_file(&self) -> Option<&File> {
        match self {
            Node::File(file) => Some(file),
            Node::Folder(_) => None,
        }
    }
}

impl From<Folder> for Node {
    fn from(folder: Folder) -> Self {
        Node::Folder(folder)
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Node::File(file)
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Lower-case extension of a file name, without the dot.
///
/// Dotfiles such as `.profile` have no extension.
pub(crate) fn extension_of(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
        _ => String::new(),
    }
}
