//! User configuration loaded from `config.json` in the XDG config directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::{Category, CategoryTable, FOOD};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CALTRACK_CONFIG";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for [`Config`].
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform does not provide a config directory.
    #[error("could not determine XDG config directory")]
    NoConfigDir,

    /// The category list is empty.
    #[error("at least one category is required")]
    EmptyCategories,

    /// Two categories share an id.
    #[error("duplicate category id: {0}")]
    DuplicateCategory(u32),

    /// New drafts start in the food category, so it must exist.
    #[error("category 1 (food) must be present")]
    MissingFoodCategory,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Options offered by the category selector, in display order.
    pub categories: CategoryTable,
    /// `tracing_subscriber::EnvFilter` directive used when `CALTRACK_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: CategoryTable::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads the config from `$CALTRACK_CONFIG`, or from
    /// `~/.config/caltrack/config.json` when unset.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(path) => PathBuf::from(path),
            None => default_config_path()?,
        };
        Self::load_from(&path)
    }

    /// Loads and validates the config at `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the category table is non-empty, has unique ids and
    /// includes [`FOOD`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::EmptyCategories);
        }
        let mut seen = HashSet::new();
        for Category { id, .. } in self.categories.iter() {
            if !seen.insert(*id) {
                return Err(ConfigError::DuplicateCategory(*id));
            }
        }
        if !self.categories.contains(FOOD) {
            return Err(ConfigError::MissingFoodCategory);
        }
        Ok(())
    }
}

/// Returns `~/.config/caltrack/config.json` (or the platform equivalent).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join("caltrack").join("config.json"))
}
