//! Shell configuration.
//!
//! Defaults, optionally replaced by a JSON file, then overridden from the
//! environment.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};
use ts_term_ordering::{SortConfig, TieBreak};

/// Environment variable naming a file-backed store.
pub const ENV_STORE_PATH: &str = "TS_STORE_PATH";
/// Environment variable for the default log filter.
pub const ENV_LOG_LEVEL: &str = "TS_LOG_LEVEL";
/// Environment variable selecting `stable` or `last-wins`.
pub const ENV_TIE_BREAK: &str = "TS_TIE_BREAK";
/// Environment variable for the first synthetic key.
pub const ENV_UNRANKED_BASE: &str = "TS_UNRANKED_BASE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Where ranks are persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreBackend {
    /// Process-local map, lost on exit
    #[default]
    Memory,
    /// JSON document on disk
    File { path: PathBuf },
}

/// Shell configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Rank persistence backend
    pub store: StoreBackend,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Base URL the admin script is served from
    pub plugin_url: String,
    /// Ordering behavior
    pub sort: SortConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            store: StoreBackend::Memory,
            log_level: "info".to_string(),
            plugin_url: "/wp-content/plugins/the-taxonomy-sort".to_string(),
            sort: SortConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_slice(&bytes).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from `lookup` (normally the process environment).
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_STORE_PATH).filter(|p| !p.trim().is_empty()) {
            self.store = StoreBackend::File {
                path: PathBuf::from(path),
            };
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|l| !l.trim().is_empty()) {
            self.log_level = level;
        }

        if let Some(raw) = lookup(ENV_TIE_BREAK) {
            match raw.parse::<TieBreak>() {
                Ok(tie_break) => self.sort.tie_break = tie_break,
                Err(e) => warn!("[ts-shell] Ignoring {}: {}", ENV_TIE_BREAK, e),
            }
        }

        if let Some(raw) = lookup(ENV_UNRANKED_BASE) {
            match raw.trim().parse::<u64>() {
                Ok(base) if base > 0 => self.sort.unranked_key_base = base,
                _ => warn!("[ts-shell] Ignoring {}: {:?}", ENV_UNRANKED_BASE, raw),
            }
        }

        self
    }
}

/// Load configuration from an optional file and the environment.
pub fn load_config(file: Option<&Path>) -> Result<ShellConfig, ConfigError> {
    let config = match file {
        Some(path) => {
            info!("[ts-shell] Loading config from {}", path.display());
            ShellConfig::from_file(path)?
        }
        None => ShellConfig::default(),
    };

    Ok(config.apply_env(|key| std::env::var(key).ok()))
}
