//! End-to-end navigation scenarios driven through the public API.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use futures::StreamExt;
use visualfs_core::config::MS_PER_DAY;
use visualfs_core::core::error::{ContentError, RenderError};
use visualfs_core::core::{GridEntry, PreviewSlot, TreeBuilder};
use visualfs_core::models::Millis;
use visualfs_core::{
    ContentFuture, File, FileTreeProvider, Folder, GridView, Navigator, Node, NotificationSink,
    PreviewResult, RichTextRenderer, SortPolicy, ViewConfig, VirtualTree,
};

const NOW: Millis = 1_717_200_000_000;

// =============================================================================
// Test collaborators
// =============================================================================

/// Tree whose content reads come from a fixed table; unknown paths fail.
struct TableTree {
    root: Folder,
    contents: Vec<(&'static str, &'static str)>,
}

impl TableTree {
    fn new(
        files: Vec<File>,
        folders: &[&str],
        contents: Vec<(&'static str, &'static str)>,
    ) -> Self {
        let mut builder = TreeBuilder::new();
        for folder in folders {
            builder.ensure_folder(folder);
        }
        for file in files {
            builder.insert_file(file);
        }
        Self {
            root: builder.build(),
            contents,
        }
    }
}

impl FileTreeProvider for TableTree {
    fn root(&self) -> &Folder {
        &self.root
    }

    fn lookup(&self, path: &str) -> Option<&Node> {
        self.root.descend(path)
    }

    fn read_content(&self, file: &File) -> ContentFuture {
        let found = self
            .contents
            .iter()
            .find(|(path, _)| *path == file.path)
            .map(|(_, content)| content.to_string());
        let path = file.path.clone();
        Box::pin(async move {
            found.ok_or(ContentError::ReadFailed {
                path,
                reason: "permission denied".into(),
            })
        })
    }
}

/// Tree whose files vanish once `delete` is called.
struct VanishingTree {
    root: Folder,
    deleted: AtomicBool,
}

impl VanishingTree {
    fn delete(&self) {
        self.deleted.store(true, Ordering::SeqCst);
    }
}

impl FileTreeProvider for VanishingTree {
    fn root(&self) -> &Folder {
        &self.root
    }

    fn lookup(&self, path: &str) -> Option<&Node> {
        if self.deleted.load(Ordering::SeqCst) {
            None
        } else {
            self.root.descend(path)
        }
    }

    fn read_content(&self, file: &File) -> ContentFuture {
        let result = if self.deleted.load(Ordering::SeqCst) {
            Err(ContentError::NotFound(file.path.clone()))
        } else {
            Ok("still here".to_string())
        };
        Box::pin(async move { result })
    }
}

/// Fails on any content containing "FAIL".
struct PickyRenderer;

impl RichTextRenderer for PickyRenderer {
    fn render(&self, content: &str, source_path: &str) -> Result<String, RenderError> {
        if content.contains("FAIL") {
            Err(RenderError::new(source_path, "unsupported block"))
        } else {
            Ok(format!("<article>{}</article>", content))
        }
    }
}

#[derive(Default)]
struct Notices(Mutex<Vec<String>>);

impl NotificationSink for Notices {
    fn show(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

fn navigator(tree: TableTree, config: ViewConfig) -> (Navigator, Arc<Notices>) {
    let notices = Arc::new(Notices::default());
    let nav = Navigator::new(
        Arc::new(tree),
        Arc::new(PickyRenderer),
        notices.clone(),
        config,
    );
    (nav, notices)
}

async fn load_previews(nav: &Navigator, view: &mut GridView) {
    let mut tasks = nav.previews(view);
    while let Some(update) = tasks.next().await {
        nav.apply_preview(view, update);
    }
}

fn file_preview<'a>(view: &'a GridView, name: &str) -> &'a PreviewSlot {
    view.entries
        .iter()
        .find_map(|entry| match entry {
            GridEntry::File(tile) if tile.name == name => Some(&tile.preview),
            _ => None,
        })
        .expect("file tile should exist")
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn test_recency_scenario() {
    let tree = TableTree::new(
        vec![
            File::new("Notes/idea.md", NOW - 5 * MS_PER_DAY),
            File::new("todo.txt", NOW - 1_000),
        ],
        &[],
        vec![("todo.txt", "buy milk"), ("Notes/idea.md", "# Idea")],
    );
    let (mut nav, notices) = navigator(tree, ViewConfig::default());

    let mut view = nav.render_at(NOW);
    let names: Vec<_> = view.entries.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["todo.txt", "Notes"]);

    let GridEntry::File(todo) = &view.entries[0] else {
        panic!("expected file tile");
    };
    assert_eq!(todo.age, "Today");

    load_previews(&nav, &mut view).await;
    assert_eq!(
        file_preview(&view, "todo.txt"),
        &PreviewSlot::Ready(PreviewResult::Text("buy milk".into()))
    );
    assert!(notices.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_degradations_stay_per_file() {
    let tree = TableTree::new(
        vec![
            File::new("ok.txt", NOW),
            File::new("locked.txt", NOW),
            File::new("broken.md", NOW),
            File::new("plain.md", NOW),
        ],
        &[],
        vec![
            ("ok.txt", "fine"),
            ("broken.md", "FAIL here"),
            ("plain.md", "hello"),
        ],
    );
    let (mut nav, notices) = navigator(tree, ViewConfig::default());
    let mut view = nav.render_at(NOW);
    load_previews(&nav, &mut view).await;

    assert_eq!(
        file_preview(&view, "ok.txt"),
        &PreviewSlot::Ready(PreviewResult::Text("fine".into()))
    );
    assert_eq!(
        file_preview(&view, "locked.txt"),
        &PreviewSlot::Ready(PreviewResult::Unavailable)
    );
    assert_eq!(
        file_preview(&view, "broken.md"),
        &PreviewSlot::Ready(PreviewResult::RawMarkdown("# broken\n\nFAIL here".into()))
    );
    assert_eq!(
        file_preview(&view, "plain.md"),
        &PreviewSlot::Ready(PreviewResult::Rendered(
            "<article># plain\n\nhello</article>".into()
        ))
    );
    // Preview degradations are silent
    assert!(notices.0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_long_text_is_truncated() {
    let tree = TableTree::new(
        vec![File::new("long.json", NOW)],
        &[],
        vec![("long.json", "  0123456789  ")],
    );
    let config = ViewConfig {
        max_preview_length: 4,
        ..ViewConfig::default()
    };
    let (mut nav, _) = navigator(tree, config);
    let mut view = nav.render_at(NOW);
    load_previews(&nav, &mut view).await;

    assert_eq!(
        file_preview(&view, "long.json"),
        &PreviewSlot::Ready(PreviewResult::Text("0123...".into()))
    );
}

#[tokio::test]
async fn test_deleted_folder_recovers_to_root() {
    let tree = TableTree::new(vec![File::new("a/b/c.txt", NOW)], &["x"], vec![]);
    let (mut nav, notices) = navigator(tree, ViewConfig::default());

    nav.navigate_into("a/b");
    assert_eq!(nav.render_at(NOW).path, "/a/b");

    nav.navigate_into("a/missing");
    let view = nav.render_at(NOW);
    assert_eq!(view.path, "/");
    assert!(!view.show_back);
    assert_eq!(
        *notices.0.lock().unwrap(),
        vec!["Folder not found: /a/missing".to_string()]
    );
}

#[tokio::test]
async fn test_navigate_up_and_breadcrumbs() {
    let tree = TableTree::new(vec![File::new("a/b/c/d.txt", NOW)], &[], vec![]);
    let (mut nav, _) = navigator(
        tree,
        ViewConfig {
            sort_policy: SortPolicy::AlphabeticalFoldersFirst,
            ..ViewConfig::default()
        },
    );

    nav.navigate_into("a/b/c");
    let view = nav.render_at(NOW);
    let crumbs: Vec<_> = view.breadcrumbs.iter().map(|b| b.path.clone()).collect();
    assert_eq!(crumbs, vec!["/a", "/a/b", "/a/b/c"]);

    nav.jump_to_breadcrumb(1).unwrap();
    assert_eq!(nav.current_path(), "/a/b");
    nav.navigate_up();
    assert_eq!(nav.current_path(), "/a");
    nav.navigate_up();
    nav.navigate_up();
    assert_eq!(nav.current_path(), "/");
}

#[tokio::test]
async fn test_stale_results_never_reach_new_folder() {
    let tree = TableTree::new(
        vec![File::new("one/a.txt", NOW), File::new("two/a.txt", NOW)],
        &[],
        vec![("one/a.txt", "from one"), ("two/a.txt", "from two")],
    );
    let (mut nav, _) = navigator(tree, ViewConfig::default());

    nav.navigate_into("one");
    let one_view = nav.render_at(NOW);
    let stale: Vec<_> = nav.previews(&one_view).collect().await;

    nav.navigate_up();
    nav.navigate_into("two");
    let mut two_view = nav.render_at(NOW);
    for update in stale {
        assert!(!nav.apply_preview(&mut two_view, update));
    }

    load_previews(&nav, &mut two_view).await;
    assert_eq!(
        file_preview(&two_view, "a.txt"),
        &PreviewSlot::Ready(PreviewResult::Text("from two".into()))
    );
}

#[tokio::test]
async fn test_file_deleted_after_render_is_unavailable() {
    let mut builder = TreeBuilder::new();
    builder.insert_file(File::new("gone.txt", NOW));
    builder.insert_file(File::new("gone.md", NOW));
    let tree = Arc::new(VanishingTree {
        root: builder.build(),
        deleted: AtomicBool::new(false),
    });
    let mut nav = Navigator::new(
        tree.clone(),
        Arc::new(PickyRenderer),
        Arc::new(Notices::default()),
        ViewConfig::default(),
    );

    let mut view = nav.render_at(NOW);
    tree.delete();
    load_previews(&nav, &mut view).await;

    for name in ["gone.txt", "gone.md"] {
        assert_eq!(
            file_preview(&view, name),
            &PreviewSlot::Ready(PreviewResult::Unavailable)
        );
    }
}

#[test]
fn test_extreme_manifest_timestamps_render() {
    let tree = VirtualTree::from_json(
        r#"{"files": [
            {"path": "ancient.txt", "modified": -9223372036854775808},
            {"path": "far/future.txt", "modified": 9223372036854775807}
        ]}"#,
    )
    .unwrap();
    let mut nav = Navigator::new(
        Arc::new(tree),
        Arc::new(PickyRenderer),
        Arc::new(Notices::default()),
        ViewConfig::default(),
    );

    let view = nav.render_at(NOW);
    let names: Vec<_> = view.entries.iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["far", "ancient.txt"]);

    let GridEntry::File(ancient) = &view.entries[1] else {
        panic!("expected file tile");
    };
    assert_eq!(ancient.age, format!("{} days ago", i64::MAX / MS_PER_DAY));
}
