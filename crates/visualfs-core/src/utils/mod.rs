//! Formatting helpers shared by the engine and its hosts.

pub mod format;
