//! Notice surface for the terminal host.

use visualfs_core::NotificationSink;

/// Prints user-facing notices to stderr.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl NotificationSink for StderrNotifier {
    fn show(&self, message: &str) {
        eprintln!("! {}", message);
    }
}
