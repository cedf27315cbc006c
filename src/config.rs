//! Configuration loaded from a JSON file.
//!
//! Every field has a serde default so a partial (or absent) file works:
//! `{}` is a valid configuration. CLI flags override config values.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,
}

/// Export behavior configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory CSV exports are written to. Unset means the current
    /// working directory.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Default config location: `$CONFIG_DIR/prodman/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("prodman").join("config.json"))
    }

    /// Load from the default location. A missing file falls back to
    /// defaults; a parse failure is logged, not fatal.
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from_file(&path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring config at {}: {:#}", path.display(), e);
            Self::default()
        })
    }
}
