//! HTTP Client Factory
//!
//! Provides a factory function for building reqwest clients with an optional
//! request timeout.

use std::time::Duration;

use crate::types::{LlmError, LlmResult};

/// Build a `reqwest::Client`.
///
/// - `Some(timeout)` -> every request on the client is abandoned after `timeout`
/// - `None` -> no client-side timeout
pub fn build_http_client(timeout: Option<Duration>) -> LlmResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| LlmError::Other {
        message: format!("failed to build HTTP client: {}", e),
    })
}
