//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use aura_cache::{Cache, FileStore};
use aura_commerce::cart::{CartStore, ShippingPolicy};
use aura_commerce::catalog::Catalog;
use aura_commerce::locale::LanguageStore;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Storage shared by the cart and language stores.
pub type SharedStore = Arc<FileStore>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// `--data-dir` override.
    data_dir_override: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        data_dir: Option<PathBuf>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            tracing::debug!(path = %path.display(), "loaded config");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            data_dir_override: data_dir,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), error = %e, "skipping unreadable config")
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory the stores write to.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.data_dir_override {
            return self.resolve_path(&dir.to_string_lossy());
        }
        match self.config.storage.data_dir {
            Some(ref dir) => self.resolve_path(dir),
            None => dirs_path().join("aura"),
        }
    }

    /// Open the on-disk key-value store.
    pub fn open_store(&self) -> Result<SharedStore> {
        let dir = self.data_dir();
        let store = FileStore::open(&dir)
            .with_context(|| format!("Failed to open data directory: {}", dir.display()))?;
        Ok(Arc::new(store))
    }

    /// Open the persisted cart.
    pub fn cart_store(&self, store: &SharedStore) -> CartStore<SharedStore> {
        CartStore::open_with_key(
            Cache::new(Arc::clone(store)),
            self.config.storage.cart_key.clone(),
        )
    }

    /// Open the persisted language choice.
    pub fn language_store(&self, store: &SharedStore) -> LanguageStore<SharedStore> {
        LanguageStore::open_with_key(
            Cache::new(Arc::clone(store)),
            self.config.storage.language_key.clone(),
        )
    }

    /// The configured catalog, or the built-in sample.
    pub fn catalog(&self) -> Result<Catalog> {
        match self.config.catalog.path {
            Some(ref path) => {
                let path = self.resolve_path(path);
                Catalog::from_json_file(&path)
                    .with_context(|| format!("Failed to load catalog: {}", path.display()))
            }
            None => Ok(Catalog::sample()),
        }
    }

    pub fn shipping_policy(&self) -> Result<ShippingPolicy> {
        self.config.shipping_policy()
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

#[cfg(test)]
impl Context {
    /// Default-configured, quiet context rooted at `dir`.
    pub(crate) fn for_dir(dir: &Path) -> Self {
        Self {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
            data_dir_override: None,
        }
    }
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}
