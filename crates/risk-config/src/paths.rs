//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/risk-dashboard/`, `~/.cache/risk-dashboard/`
//! - macOS: `~/Library/Application Support/risk-dashboard/`, `~/Library/Caches/risk-dashboard/`
//! - Windows: `%APPDATA%\risk-dashboard\`, `%LOCALAPPDATA%\risk-dashboard\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "risk-dashboard";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Get path to the global app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Directory for debug log files
///
/// Debug builds log next to the binary's working directory, release builds
/// into the cache directory.
pub fn log_dir() -> Result<PathBuf> {
    if cfg!(debug_assertions) {
        Ok(std::env::current_dir()?)
    } else {
        cache_dir()
    }
}
