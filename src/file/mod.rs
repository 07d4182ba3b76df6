// src/file/mod.rs
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::DashboardConfig;

pub mod config;
pub mod upload;
pub mod download;

pub const CONFIG_ENV_VAR: &str = "AAL_DASHBOARD_CONFIG";

// Core trait for file operations
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T>;
    fn save(&self, data: &T, path: &Path) -> Result<()>;
}

/// Resolves the settings file: the env override first, then the per-user
/// config directory.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("aal-dashboard").join("dashboard.ron"))
}

/// Loads settings, falling back to defaults when the file is missing or
/// unreadable. A broken settings file never prevents startup.
pub fn load_config() -> DashboardConfig {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            info!("no config directory available, using default settings");
            DashboardConfig::default()
        }
    }
}

/// Reads settings from `path` without ever writing to it.
pub fn load_config_from(path: &Path) -> DashboardConfig {
    if !path.exists() {
        info!(path = %path.display(), "no settings file, using defaults");
        return DashboardConfig::default();
    }

    let handler = config::ConfigFileHandler::new();
    match handler.load(path) {
        Ok(config) => {
            info!(path = %path.display(), "loaded dashboard settings");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), "ignoring dashboard settings: {:#}", e);
            DashboardConfig::default()
        }
    }
}
