//! Provider seam
//!
//! The planner only needs single-shot completions, so the trait is small.
//! Status mapping for OpenAI-compatible error bodies lives here too.

use async_trait::async_trait;
use serde_json::Value;

use super::types::{LlmError, LlmResponse, LlmResult, Message, ProviderConfig};

/// A chat model the planner can ask for one completion.
///
/// Held as `Arc<dyn LlmProvider>`; implementations keep no per-call state.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short provider label used in logs and errors.
    fn name(&self) -> &'static str;

    /// Model identifier sent upstream.
    fn model(&self) -> &str;

    /// Run one completion over `messages`, with `system` as the leading
    /// instruction when given. Sampling settings come from `config()`.
    async fn send_message(
        &self,
        messages: Vec<Message>,
        system: Option<String>,
    ) -> LlmResult<LlmResponse>;

    fn config(&self) -> &ProviderConfig;
}

pub fn missing_api_key_error(provider: &str) -> LlmError {
    LlmError::AuthenticationFailed {
        message: format!("no API key configured for {}", provider),
    }
}

/// Pull `error.message` out of an OpenAI-style error body, falling back to
/// the trimmed body text.
pub fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

/// Map a non-success upstream status to an `LlmError`.
///
/// `retry_after` is the upstream `Retry-After` header in seconds, if any.
pub fn parse_http_error(
    status: u16,
    body: &str,
    provider: &str,
    retry_after: Option<u32>,
) -> LlmError {
    let message = upstream_error_message(body);
    match status {
        401 | 403 => LlmError::AuthenticationFailed {
            message: format!("{} rejected the credential ({}): {}", provider, status, message),
        },
        404 => LlmError::ModelNotFound { model: message },
        429 => LlmError::RateLimited {
            message,
            retry_after,
        },
        400 | 422 => LlmError::InvalidRequest { message },
        500..=599 => LlmError::ServerError {
            message,
            status: Some(status),
        },
        _ => LlmError::Other {
            message: format!("{} returned HTTP {}: {}", provider, status, message),
        },
    }
}
