//! Error Handling
//!
//! `AppError` covers the server, the plan client and configuration loading.
//! Each variant knows its HTTP status and how much of itself may be shown.

use task_planner_core::CoreError;
use task_planner_llm::LlmError;
use thiserror::Error;

use crate::models::settings::Posture;

/// Message returned for failures whose cause must not reach the caller.
pub const GENERIC_ERROR_MESSAGE: &str = "Internal server error";

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed request, correctable by the user
    #[error("Validation error: {0}")]
    Validation(String),

    /// The model answered with no content
    #[error("{0}")]
    UpstreamEmpty(String),

    /// The model answered with text that could not be repaired into JSON
    #[error("{0}")]
    Parse(String),

    /// LLM provider errors
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP transport errors (plan client side)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request is already in flight
    #[error("Busy: {0}")]
    Busy(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an upstream-empty error
    pub fn upstream_empty(msg: impl Into<String>) -> Self {
        Self::UpstreamEmpty(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a busy error
    pub fn busy(msg: impl Into<String>) -> Self {
        Self::Busy(msg.into())
    }

    /// HTTP status code used when this error ends a request.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) => 400,
            AppError::Busy(_) => 409,
            _ => 500,
        }
    }

    /// Message safe to hand back to the caller.
    ///
    /// Validation, empty-reply and parse failures carry no internal detail and
    /// are returned verbatim. Everything else collapses to a generic message,
    /// with the cause appended only in development posture.
    pub fn public_message(&self, posture: Posture) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::UpstreamEmpty(msg) | AppError::Parse(msg) => msg.clone(),
            other => match posture {
                Posture::Production => GENERIC_ERROR_MESSAGE.to_string(),
                Posture::Development => format!("{}: {}", GENERIC_ERROR_MESSAGE, other),
            },
        }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Parse(msg) => AppError::Parse(msg),
            CoreError::Serialization(e) => AppError::Serialization(e),
        }
    }
}
