//! Path bar shown above the grid.
//!
//! Displays the full path with numbered segments; the numbers are the
//! indices accepted by `--crumb`.

use visualfs_core::GridView;

const SEPARATOR: &str = " › ";

/// Render the path bar line, e.g. `/ › [0] notes › [1] daily`.
pub fn path_bar(view: &GridView) -> String {
    let mut line = String::from("/");
    for (idx, crumb) in view.breadcrumbs.iter().enumerate() {
        line.push_str(SEPARATOR);
        line.push_str(&format!("[{}] {}", idx, crumb.label));
    }
    line
}
