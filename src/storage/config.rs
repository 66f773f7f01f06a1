//! JSON Configuration Management
//!
//! Resolves the application configuration from defaults, an optional JSON
//! file and environment overrides. The file is read but never written.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::settings::{AppConfig, SettingsUpdate};
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::config_path;

/// Configuration service for managing app settings
#[derive(Debug)]
pub struct ConfigService {
    config_path: Option<PathBuf>,
    config: AppConfig,
}

impl ConfigService {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, `~/.task-planner/config.json`
    /// is used when present and defaults otherwise. Environment overrides are
    /// applied last.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Same as [`ConfigService::load`] with an injectable environment lookup.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(AppError::config(format!(
                        "Config file not found: {}",
                        p.display()
                    )));
                }
                Some(p.to_path_buf())
            }
            None => config_path().ok().filter(|p| p.exists()),
        };

        let mut config = match &config_path {
            Some(p) => Self::load_from_file(p)?,
            None => AppConfig::default(),
        };

        let update = SettingsUpdate::from_env(&config, lookup);
        config.apply_update(update);
        config.validate().map_err(AppError::config)?;

        if let Some(p) = &config_path {
            tracing::info!(path = %p.display(), "loaded configuration file");
        }

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Load configuration from a file
    fn load_from_file(path: &Path) -> AppResult<AppConfig> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a clone of the current configuration
    pub fn get_config_clone(&self) -> AppConfig {
        self.config.clone()
    }

    /// Path of the file the configuration was read from, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Update the in-memory configuration with a partial update
    pub fn update_config(&mut self, update: SettingsUpdate) -> AppResult<AppConfig> {
        let mut next = self.config.clone();
        next.apply_update(update);
        next.validate().map_err(AppError::config)?;
        self.config = next;
        Ok(self.config.clone())
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self {
            config_path: None,
            config: AppConfig::default(),
        }
    }
}
