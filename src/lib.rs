//! Task Planner
//!
//! Backend and client for an LLM-backed task planner. It includes:
//! - HTTP handlers for the planner API (axum)
//! - The plan request normalizer and the plan presentation adapter
//! - Configuration loading
//! - Data models and utilities

pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

pub use commands::{router, serve};
pub use models::response::*;
pub use models::settings::{AppConfig, ClientConfig, Posture, SettingsUpdate};
pub use state::AppState;
pub use storage::ConfigService;
pub use utils::error::{AppError, AppResult};
