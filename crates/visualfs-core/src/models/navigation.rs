//! Current-location state for a single view instance.

/// One clickable segment of the path bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Segment name shown to the user
    pub label: String,
    /// Absolute path truncated after this segment (e.g., `/a/b`)
    pub path: String,
}

/// Location of a view, plus a generation counter for detecting stale work.
///
/// `current_path` always starts with `/`; `/` alone denotes the root.
/// The generation increases on every navigation, including the reset to
/// root after a failed resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    current_path: String,
    generation: u64,
}

impl NavigationState {
    /// Fresh state at the root.
    pub fn new() -> Self {
        Self {
            current_path: "/".to_string(),
            generation: 0,
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check if the view is at the root.
    pub fn is_root(&self) -> bool {
        self.current_path == "/"
    }

    /// Current path without the leading slash, as used by tree lookups.
    pub fn relative_path(&self) -> &str {
        self.current_path.strip_prefix('/').unwrap_or(&self.current_path)
    }

    /// Move into a folder given by its root-relative path.
    ///
    /// The path is not validated here; the next resolution does that.
    pub fn navigate_into(&mut self, path: &str) {
        self.set_path(format!("/{}", path));
    }

    /// Go up one level. A no-op on the path when already at the root.
    pub fn navigate_up(&mut self) {
        let mut segments = self.segments();
        segments.pop();
        let path = join_absolute(&segments);
        self.set_path(path);
    }

    /// Return to the root.
    pub fn reset_to_root(&mut self) {
        self.set_path("/".to_string());
    }

    /// Jump to an absolute path taken from a breadcrumb.
    ///
    /// A missing leading `/` is added.
    pub fn jump_to(&mut self, path: &str) {
        let path = match path.strip_prefix('/') {
            Some(_) => path.to_string(),
            None => format!("/{}", path),
        };
        self.set_path(path);
    }

    /// Decompose the current path into cumulative breadcrumbs.
    ///
    /// Empty at the root; `/a/b/c` yields jump paths `/a`, `/a/b`, `/a/b/c`.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        let segments = self.segments();
        (0..segments.len())
            .map(|idx| Breadcrumb {
                label: segments[idx].to_string(),
                path: join_absolute(&segments[..=idx]),
            })
            .collect()
    }

    fn segments(&self) -> Vec<&str> {
        self.current_path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn set_path(&mut self, path: String) {
        self.current_path = path;
        self.generation += 1;
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

fn join_absolute(segments: &[&str]) -> String {
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}
