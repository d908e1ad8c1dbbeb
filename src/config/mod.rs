//! Configuration module for ollama-rsync
//!
//! Loads optional settings from `$XDG_CONFIG_HOME/ollama-rsync/config.toml` or
//! `~/.config/ollama-rsync/config.toml`. A missing file means defaults.
//!
//! The model store root is resolved with this precedence:
//! `OLLAMA_MODELS` (where `*` selects the platform default), then
//! `store.models_dir` from the config file, then the platform default.
//!
//! # Example
//!
//! ```no_run
//! use ollama_rsync::config::Config;
//!
//! let config = Config::load().expect("Failed to load config");
//! let root = config.store_root().expect("No model store");
//! println!("Model store: {}", root.display());
//! ```

pub mod paths;
pub mod schema;

pub use paths::{resolve_store_root, HostOs, MODELS_ENV, WILDCARD};
pub use schema::Config;

use crate::error::{Result, SyncError};
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`, falling back to defaults when it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| SyncError::Config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Resolve the local model store root and check that it exists
    pub fn store_root(&self) -> Result<PathBuf> {
        let os = HostOs::current();
        let env_value = std::env::var(MODELS_ENV).ok();
        let home = paths::platform_home(os);
        let root = self.resolve_store_root(os, env_value.as_deref(), home.as_deref());

        if !root.is_dir() {
            return Err(SyncError::StoreNotFound(root));
        }

        tracing::debug!("Using model store at {}", root.display());
        Ok(root)
    }

    /// Store root for the given OS and environment, without touching the filesystem
    #[must_use]
    pub fn resolve_store_root(
        &self,
        os: HostOs,
        env_value: Option<&str>,
        home: Option<&Path>,
    ) -> PathBuf {
        match (env_value, &self.store.models_dir) {
            (None, Some(dir)) => dir.clone(),
            (value, _) => resolve_store_root(os, value, home),
        }
    }
}

/// Get config file path
fn config_path() -> Option<PathBuf> {
    let config_dir = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config)
    } else {
        dirs::home_dir()?.join(".config")
    };

    Some(config_dir.join("ollama-rsync").join("config.toml"))
}
