//! Planner Service
//!
//! One request in, one model call out. The provider is injected so tests can
//! substitute a scripted one.

use std::sync::Arc;

use serde_json::Value;
use task_planner_core::{join_violations, PlanRequest, PlanResult};
use task_planner_llm::{LlmProvider, Message, StopReason};
use uuid::Uuid;

use super::prompt::{build_prompt, SYSTEM_PROMPT};
use super::repair::{normalize_reply, parse_model_reply, ParsedReply};
use crate::models::response::ApiResponse;
use crate::models::settings::Posture;
use crate::utils::error::{AppError, AppResult};

/// Message returned when the model answers with nothing.
pub const NO_CONTENT_MESSAGE: &str = "No content received from the model";

/// Message returned when the reply cannot be repaired into JSON.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON response from the model";

/// Stateless plan request handler
#[derive(Clone)]
pub struct PlannerService {
    provider: Arc<dyn LlmProvider>,
    posture: Posture,
}

impl PlannerService {
    pub fn new(provider: Arc<dyn LlmProvider>, posture: Posture) -> Self {
        Self { provider, posture }
    }

    pub fn provider(&self) -> &Arc<dyn LlmProvider> {
        &self.provider
    }

    pub fn posture(&self) -> Posture {
        self.posture
    }

    /// Handle an untyped request body and produce the response envelope.
    pub async fn generate_plan(&self, body: &Value) -> ApiResponse<PlanResult> {
        let request_id = Uuid::new_v4();

        let request = match PlanRequest::validate_json(body) {
            Ok(request) => request,
            Err(violations) => {
                let err = AppError::validation(join_violations(&violations));
                tracing::info!(%request_id, reason = %err, "rejected plan request");
                return ApiResponse::from_error(&err, self.posture);
            }
        };

        tracing::info!(
            %request_id,
            mode = %request.mode,
            task_len = request.task.len(),
            "generating plan"
        );

        match self.run(&request).await {
            Ok(result) => {
                tracing::info!(
                    %request_id,
                    steps = result.plan_entries().len(),
                    "plan generated"
                );
                ApiResponse::ok(result)
            }
            Err(err) => {
                tracing::error!(%request_id, error = %err, "plan generation failed");
                ApiResponse::from_error(&err, self.posture)
            }
        }
    }

    /// Ask the model for a plan and repair its reply.
    pub async fn run(&self, request: &PlanRequest) -> AppResult<PlanResult> {
        let prompt = build_prompt(&request.task, request.mode);

        let response = self
            .provider
            .send_message(vec![Message::user(prompt)], Some(SYSTEM_PROMPT.to_string()))
            .await?;

        let content = response
            .non_empty_content()
            .ok_or_else(|| AppError::upstream_empty(NO_CONTENT_MESSAGE))?;

        tracing::debug!(
            model = %response.model,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            total_tokens = response.usage.total_tokens(),
            reply = content,
            "model reply received"
        );

        if response.stop_reason == StopReason::MaxTokens {
            tracing::warn!(
                max_tokens = self.provider.config().max_tokens,
                "model reply was cut off at the token ceiling"
            );
        }

        match parse_model_reply(content) {
            ParsedReply::Parsed(reply) => Ok(normalize_reply(&reply, request.mode)),
            ParsedReply::Malformed(raw) => {
                tracing::warn!(reply_len = raw.len(), "model reply could not be repaired");
                Err(AppError::parse(INVALID_JSON_MESSAGE))
            }
        }
    }
}
