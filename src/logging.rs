//! File-based tracing setup.
//!
//! The terminal belongs to the UI while the alternate screen is active, so
//! diagnostics go to a log file (`--log-file`, default in the system temp
//! directory). Verbosity is controlled with `RUST_LOG`.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("prodman.log")
}

/// Install the global subscriber writing to `log_path`.
pub fn init(log_path: &Path) -> Result<()> {
    let file = File::create(log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {e}"))?;

    Ok(())
}
