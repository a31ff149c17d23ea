//! Host configuration.
//!
//! Loaded from an optional TOML file with a `[view]` table (engine
//! settings) and a `[logging]` table. Command-line flags override file
//! values; missing keys fall back to defaults.
//!
//! ```toml
//! [view]
//! max_preview_length = 300
//! sort_policy = "alphabetical"
//!
//! [logging]
//! level = "debug"
//! ```

use std::path::Path;

use serde::Deserialize;
use visualfs_core::ViewConfig;

use crate::error::AppError;

// =============================================================================
// Logging Configuration
// =============================================================================

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "VISUALFS_LOG";

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive: trace, debug, info, warn, error, off
    pub level: String,
    /// Enable colored output
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            color: true,
        }
    }
}

// =============================================================================
// Preview Rendering
// =============================================================================

/// Largest markdown document handed to the renderer, in bytes.
///
/// Larger documents fall back to their raw text.
pub const MAX_RENDER_INPUT_BYTES: usize = 256 * 1024;

/// Lines of preview text shown per tile.
pub const TILE_PREVIEW_LINES: usize = 6;

// =============================================================================
// AppConfig
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub view: ViewConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from `path`, or use defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
                Self::from_toml_str(&text)
            }
            None => Ok(Self::default()),
        }
    }
}
