//! Root application module.
//!
//! Wires a file tree, the markdown renderer and the notice surface into a
//! [`Navigator`], applies the requested navigation and produces the text
//! to print.

use std::sync::Arc;

use futures::StreamExt;
use tracing::{debug, info};
use visualfs_core::{
    Activation, FileTreeProvider, GridView, Navigator, Node, NotificationSink, ViewConfig,
    VirtualTree,
};

use crate::cli::Cli;
use crate::components::render_grid;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::host::{LocalTree, StderrNotifier};
use crate::utils::ComrakRenderer;

// ============================================================================
// App
// ============================================================================

/// A navigator plus the provider it browses.
pub struct App {
    provider: Arc<dyn FileTreeProvider>,
    navigator: Navigator,
}

impl App {
    pub fn new(
        provider: Arc<dyn FileTreeProvider>,
        notifier: Arc<dyn NotificationSink>,
        config: ViewConfig,
    ) -> Self {
        let navigator = Navigator::new(
            Arc::clone(&provider),
            Arc::new(ComrakRenderer::default()),
            notifier,
            config,
        );
        Self {
            provider,
            navigator,
        }
    }

    pub fn navigator(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    /// Render the current folder with every preview settled.
    pub async fn view(&mut self) -> GridView {
        let mut view = self.navigator.render();
        let mut tasks = self.navigator.previews(&view);
        while let Some(update) = tasks.next().await {
            self.navigator.apply_preview(&mut view, update);
        }
        view
    }

    /// Render the current folder as text.
    pub async fn show(&mut self) -> String {
        render_grid(&self.view().await)
    }

    /// Activate the tile named `name` in the current folder.
    ///
    /// Folders are entered and the new folder is shown; files are read
    /// and their full content returned.
    pub async fn open(&mut self, name: &str) -> Result<String, AppError> {
        let view = self.navigator.render();
        let entry = view
            .entries
            .iter()
            .find(|entry| entry.name() == name)
            .ok_or_else(|| AppError::NoSuchEntry(name.to_string()))?;

        match self.navigator.activate(entry) {
            Activation::Navigated => Ok(self.show().await),
            Activation::OpenFile(path) => self.read(&path).await,
        }
    }

    async fn read(&self, path: &str) -> Result<String, AppError> {
        let file = self
            .provider
            .lookup(path)
            .and_then(Node::as_file)
            .ok_or_else(|| AppError::NoSuchEntry(path.to_string()))?;
        debug!(path, "Opening file");
        Ok(self.provider.read_content(file).await?)
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Load the tree named on the command line.
pub fn load_provider(cli: &Cli) -> Result<Arc<dyn FileTreeProvider>, AppError> {
    match &cli.manifest {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
            let tree = VirtualTree::from_json(&json)?;
            info!(manifest = %path.display(), "Loaded manifest");
            Ok(Arc::new(tree))
        }
        None => Ok(Arc::new(LocalTree::scan(&cli.dir)?)),
    }
}

/// Run one invocation and return the text to print.
pub async fn run(cli: &Cli, config: AppConfig) -> Result<String, AppError> {
    let provider = load_provider(cli)?;
    let mut app = App::new(provider, Arc::new(StderrNotifier), config.view);
    navigate(app.navigator(), cli)?;

    match &cli.open {
        Some(name) => app.open(name).await,
        None => Ok(app.show().await),
    }
}

fn navigate(navigator: &mut Navigator, cli: &Cli) -> Result<(), AppError> {
    let start = cli.start_folder();
    if !start.is_empty() {
        navigator.navigate_into(start);
    }
    if cli.up {
        navigator.navigate_up();
    }
    if let Some(index) = cli.crumb {
        navigator.jump_to_breadcrumb(index)?;
    }
    Ok(())
}
