//! Response Types
//!
//! The response envelope returned by every HTTP endpoint, and decoded again
//! on the presentation side.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::settings::Posture;
use crate::utils::error::AppError;

/// Payload of an envelope: the typed result on success, a message otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData<T> {
    Payload(T),
    Message(String),
}

/// Generic response envelope for all endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub success: bool,
    pub data: ResponseData<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with data
    pub fn ok(data: T) -> Self {
        Self {
            status_code: 200,
            success: true,
            data: ResponseData::Payload(data),
        }
    }

    /// Create an error response with message
    pub fn err(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            success: false,
            data: ResponseData::Message(message.into()),
        }
    }

    /// Error response for a failed request, honouring the error posture
    pub fn from_error(error: &AppError, posture: Posture) -> Self {
        Self::err(error.status_code(), error.public_message(posture))
    }

    /// Whether the envelope reports a completed request with a payload
    pub fn is_verified_success(&self) -> bool {
        self.success && self.status_code == 200
    }

    /// The typed payload, if the envelope carries one
    pub fn into_payload(self) -> Option<T> {
        match self.data {
            ResponseData::Payload(data) => Some(data),
            ResponseData::Message(_) => None,
        }
    }

    /// The message, if the envelope carries one
    pub fn message(&self) -> Option<&str> {
        match &self.data {
            ResponseData::Payload(_) => None,
            ResponseData::Message(msg) => Some(msg),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
    pub provider: String,
    pub model: String,
    /// Whether an API credential is configured for the provider
    pub credential: bool,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            service: "task-planner".to_string(),
            provider: String::new(),
            model: String::new(),
            credential: false,
        }
    }
}
