//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use bakery_cart::CartStore;
use bakery_storage::FileBackend;
use bakery_view::CartView;

use crate::config::CliConfig;
use crate::output::{Output, TerminalSurface};

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Directory the cart is persisted in.
    pub data_dir: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest `bakery.toml`.
    pub fn load(config_path: Option<&str>, data_dir: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            Self::find_config(&cwd).unwrap_or_default()
        };

        let data_dir = data_dir
            .map(PathBuf::from)
            .or_else(|| config.storage.data_dir.clone())
            .unwrap_or_else(default_data_dir);

        Ok(Self {
            config,
            output,
            data_dir,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let config_names = ["bakery.toml", ".bakery.toml", "bakery.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Open the persisted cart.
    pub fn open_cart(&self) -> Result<CartStore<FileBackend>> {
        let backend = FileBackend::open(&self.data_dir)
            .with_context(|| format!("Failed to open cart storage in {}", self.data_dir.display()))?;
        Ok(CartStore::open(backend, self.config.cart.clone())?)
    }

    /// A view that draws to the terminal.
    pub fn view(&self) -> CartView<TerminalSurface> {
        CartView::new(
            TerminalSurface::new(self.output.clone()),
            self.config.cart.notice_ttl(),
        )
    }
}

/// Get the platform-specific data directory.
fn default_data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share").join("bakery")
    } else {
        std::env::temp_dir().join("bakery")
    }
}
