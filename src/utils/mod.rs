//! Utility modules for the terminal host.
//!
//! Provides:
//! - [`ComrakRenderer`] - Markdown rendering with XSS sanitization

mod markdown;

pub use markdown::ComrakRenderer;
