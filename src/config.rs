// Configuration loaded from an optional YAML file

use crate::models::{MAX_TEXT_LEN, SortOrder};
use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const CONFIG_FILE: &str = "tasklist.yml";

/// Session settings; every field has a default so partial files are valid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum task text length in Unicode code points
    pub max_text_len: usize,
    /// Sort order a new session starts with
    pub sort_order: SortOrder,
    /// Color rows by priority
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_text_len: MAX_TEXT_LEN,
            sort_order: SortOrder::Asc,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, `<config dir>/tasklist/tasklist.yml`
    /// is used when present, and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(eyre!("Config file not found: {}", path.display()));
            }
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Platform config location, e.g. `~/.config/tasklist/tasklist.yml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tasklist").join(CONFIG_FILE))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&content).with_context(|| format!("Invalid config file {}", path.display()))?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse YAML; an empty document yields defaults
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(content).context("Failed to parse YAML")?;
        if config.max_text_len == 0 {
            return Err(eyre!("max_text_len must be at least 1"));
        }
        Ok(config)
    }
}
