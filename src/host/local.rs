//! File tree backed by a directory on local disk.
//!
//! The tree is scanned once with `walkdir`; hidden entries (names starting
//! with `.`) and anything that is neither a regular file nor a directory are
//! skipped. Content is read lazily through `tokio::fs` when a preview asks.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use visualfs_core::core::error::ContentError;
use visualfs_core::core::TreeBuilder;
use visualfs_core::models::Millis;
use visualfs_core::{ContentFuture, File, FileTreeProvider, Folder, Node};
use walkdir::{DirEntry, WalkDir};

use crate::error::AppError;

pub struct LocalTree {
    base: PathBuf,
    root: Folder,
}

impl LocalTree {
    /// Scan `base` recursively into an in-memory tree.
    ///
    /// Fails only when `base` itself cannot be read; unreadable entries
    /// below it are logged and left out.
    pub fn scan(base: impl Into<PathBuf>) -> Result<Self, AppError> {
        let base = base.into();
        let mut builder = TreeBuilder::new();
        let mut files = 0usize;

        let walker = WalkDir::new(&base)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => return Err(err.into()),
                Err(err) => {
                    warn!(error = %err, "Skipping unreadable entry");
                    continue;
                }
            };

            let Some(rel) = relative_path(&base, entry.path()) else {
                continue;
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                builder.ensure_folder(&rel);
            } else if file_type.is_file() {
                let metadata = match entry.metadata() {
                    Ok(metadata) => metadata,
                    Err(err) => {
                        warn!(path = %rel, error = %err, "Skipping file without metadata");
                        continue;
                    }
                };
                let mtime = metadata.modified().map(to_millis).unwrap_or(0);
                if builder.insert_file(File::new(&rel, mtime).with_size(metadata.len())) {
                    files += 1;
                }
            } else {
                debug!(path = %rel, "Skipping special file");
            }
        }

        info!(base = %base.display(), files, "Scanned directory");

        Ok(Self {
            base,
            root: builder.build(),
        })
    }
}

impl FileTreeProvider for LocalTree {
    fn root(&self) -> &Folder {
        &self.root
    }

    fn lookup(&self, path: &str) -> Option<&Node> {
        self.root.descend(path)
    }

    fn read_content(&self, file: &File) -> ContentFuture {
        let full = self.base.join(&file.path);
        let path = file.path.clone();
        Box::pin(async move {
            tokio::fs::read_to_string(&full)
                .await
                .map_err(|err| match err.kind() {
                    ErrorKind::NotFound => ContentError::NotFound(path),
                    _ => ContentError::ReadFailed {
                        path,
                        reason: err.to_string(),
                    },
                })
        })
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Root-relative path with `/` separators.
fn relative_path(base: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let segments: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    (!segments.is_empty()).then(|| segments.join("/"))
}

fn to_millis(time: SystemTime) -> Millis {
    DateTime::<Utc>::from(time).timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("notes/daily")).unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("todo.txt"), "buy milk").unwrap();
        fs::write(dir.path().join("notes/daily/mon.md"), "# Monday").unwrap();
        fs::write(dir.path().join(".git/HEAD"), "ref").unwrap();
        fs::write(dir.path().join(".env"), "SECRET=1").unwrap();
        dir
    }

    #[test]
    fn test_scan_builds_tree() {
        let dir = fixture();
        let tree = LocalTree::scan(dir.path()).unwrap();

        let mut names: Vec<_> = tree.root().children.iter().map(|n| n.name()).collect();
        names.sort();
        assert_eq!(names, vec!["empty", "notes", "todo.txt"]);

        let todo = tree.lookup("todo.txt").and_then(Node::as_file).unwrap();
        assert_eq!(todo.size, Some(8));
        assert_eq!(todo.extension, "txt");
        assert!(todo.mtime > 0);

        assert!(tree.lookup("notes/daily/mon.md").is_some());
        assert!(tree.lookup("empty").unwrap().as_folder().unwrap().children.is_empty());
    }

    #[test]
    fn test_hidden_entries_skipped() {
        let dir = fixture();
        let tree = LocalTree::scan(dir.path()).unwrap();
        assert!(tree.lookup(".git").is_none());
        assert!(tree.lookup(".env").is_none());
    }

    #[test]
    fn test_missing_base_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = LocalTree::scan(dir.path().join("gone"));
        assert!(matches!(result, Err(AppError::Walk(_))));
    }

    #[tokio::test]
    async fn test_read_content() {
        let dir = fixture();
        let tree = LocalTree::scan(dir.path()).unwrap();
        let todo = tree.lookup("todo.txt").and_then(Node::as_file).unwrap().clone();

        assert_eq!(tree.read_content(&todo).await.unwrap(), "buy milk");

        fs::remove_file(dir.path().join("todo.txt")).unwrap();
        assert_eq!(
            tree.read_content(&todo).await,
            Err(ContentError::NotFound("todo.txt".into()))
        );
    }

    #[tokio::test]
    async fn test_binary_content_fails_to_read() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blob.txt"), [0xff, 0xfe, 0x00]).unwrap();
        let tree = LocalTree::scan(dir.path()).unwrap();
        let blob = tree.lookup("blob.txt").and_then(Node::as_file).unwrap().clone();

        assert!(matches!(
            tree.read_content(&blob).await,
            Err(ContentError::ReadFailed { .. })
        ));
    }
}
