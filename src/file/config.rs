// src/file/config.rs
use super::FileHandler;
use crate::config::DashboardConfig;
use std::path::Path;
use std::fs;
use anyhow::{Result, Context};

#[derive(Debug)]
pub struct ConfigFileHandler;

impl ConfigFileHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FileHandler<DashboardConfig> for ConfigFileHandler {
    fn load(&self, path: &Path) -> Result<DashboardConfig> {
        if !path.exists() {
            return Ok(DashboardConfig::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        ron::from_str(&content).context("Failed to parse dashboard settings")
    }

    fn save(&self, data: &DashboardConfig, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = ron::ser::to_string_pretty(
            data,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(2)
        )?;
        fs::write(path, content)?;
        Ok(())
    }
}
