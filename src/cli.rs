//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use visualfs_core::SortPolicy;

use crate::config::AppConfig;

/// visualfs - Browse a file tree as a grid of recency-sorted tiles
#[derive(Debug, Parser)]
#[command(name = "visualfs", version)]
#[command(about = "Browse a file tree as a grid of recency-sorted tiles with content previews")]
pub struct Cli {
    /// Directory to browse
    #[arg(long, default_value = ".", conflicts_with = "manifest")]
    pub dir: PathBuf,

    /// JSON manifest describing a virtual tree, instead of a directory
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Folder to open, e.g. /notes/daily
    #[arg(long, default_value = "/")]
    pub path: String,

    /// Go up one level after opening --path
    #[arg(long)]
    pub up: bool,

    /// Jump to the breadcrumb at this index
    #[arg(long)]
    pub crumb: Option<usize>,

    /// Activate the tile with this name (folders are entered, files printed)
    #[arg(long)]
    pub open: Option<String>,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Child ordering (overrides config)
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Maximum characters in a text preview (overrides config)
    #[arg(long)]
    pub max_preview: Option<usize>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Most recently modified first
    Recency,
    /// Folders first, then by name
    Alphabetical,
}

impl From<SortArg> for SortPolicy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Recency => SortPolicy::RecencyDescending,
            SortArg::Alphabetical => SortPolicy::AlphabeticalFoldersFirst,
        }
    }
}

impl Cli {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(sort) = self.sort {
            config.view.sort_policy = sort.into();
        }
        if let Some(max) = self.max_preview {
            config.view.max_preview_length = max;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }

    /// Requested folder as a root-relative path (`""` for the root).
    pub fn start_folder(&self) -> &str {
        self.path.trim_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["visualfs"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("."));
        assert_eq!(cli.start_folder(), "");
        assert!(!cli.up);
        assert!(cli.manifest.is_none());
    }

    #[test]
    fn test_dir_conflicts_with_manifest() {
        let result = Cli::try_parse_from(["visualfs", "--dir", "a", "--manifest", "m.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "visualfs",
            "--sort",
            "alphabetical",
            "--max-preview",
            "40",
            "--path",
            "/notes/daily/",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.view.sort_policy, SortPolicy::AlphabeticalFoldersFirst);
        assert_eq!(config.view.max_preview_length, 40);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(cli.start_folder(), "notes/daily");
    }

    #[test]
    fn test_unknown_sort_rejected() {
        assert!(Cli::try_parse_from(["visualfs", "--sort", "size"]).is_err());
    }
}
