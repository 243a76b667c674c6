//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use minishop_commerce::SessionId;
use minishop_sdk::Storefront;
use tracing::debug;

use crate::config::{ShopConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or by discovery.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (ShopConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (ShopConfig::load(&path)?, Some(path)),
                None => (ShopConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// A fresh storefront built from the loaded config.
    pub fn storefront(&self) -> Result<Storefront> {
        self.config.storefront()
    }

    /// The configured cart session, or a generated one when `store.session`
    /// is blank.
    pub fn session(&self) -> SessionId {
        let name = self.config.store.session.trim();
        if name.is_empty() {
            SessionId::generate()
        } else {
            SessionId::new(name)
        }
    }

    /// Context over `config` with JSON output and no config file.
    #[cfg(test)]
    pub(crate) fn quiet(config: ShopConfig) -> Self {
        Self {
            config,
            config_path: None,
            output: Output::new(false, true),
            cwd: std::env::temp_dir(),
        }
    }
}

/// Find a config file in `start` or any parent directory.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                debug!(path = %candidate.display(), "config file found");
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}
