//! Core Error Types
//!
//! Errors raised while decoding plan records. Request field checks report
//! `FieldViolation`s instead. The application
//! crate folds these into its own `AppError`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// A plan record did not match its expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input was JSON, but not the JSON a plan record needs
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
