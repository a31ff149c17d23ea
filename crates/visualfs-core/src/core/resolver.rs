//! Resolution of the current location to a folder.

use tracing::info;

use super::provider::{FileTreeProvider, NotificationSink};
use crate::config::FOLDER_NOT_FOUND;
use crate::models::{Folder, NavigationState, Node};

/// Resolve the state's current path to a folder.
///
/// A path that no longer exists, or that names a file, is recovered from:
/// one notice is shown, the state is reset to `/`, and the root folder is
/// returned. Resolution therefore never fails.
pub fn resolve_current_folder<'p>(
    state: &mut NavigationState,
    provider: &'p dyn FileTreeProvider,
    notifier: &dyn NotificationSink,
) -> &'p Folder {
    if state.is_root() {
        return provider.root();
    }

    match provider.lookup(state.relative_path()) {
        Some(Node::Folder(folder)) => folder,
        _ => {
            let message = format!("{}{}", FOLDER_NOT_FOUND, state.current_path());
            info!(path = %state.current_path(), "Recovering to root");
            notifier.show(&message);
            state.reset_to_root();
            provider.root()
        }
    }
}
