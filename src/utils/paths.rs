//! Cross-Platform Path Utilities
//!
//! Functions for resolving application directories across platforms.

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the Task Planner directory (~/.task-planner/)
pub fn task_planner_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".task-planner"))
}

/// Get the default config file path (~/.task-planner/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(task_planner_dir()?.join("config.json"))
}
