//! Collaborators the terminal host plugs into the engine.

mod local;
mod notify;

pub use local::LocalTree;
pub use notify::StderrNotifier;
