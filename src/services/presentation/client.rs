//! Plan Client
//!
//! Requests plans from the planner endpoint and falls back to a mock plan on
//! any failure, so callers always receive steps.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use task_planner_core::{AgentMode, PlanResult};

use super::mock::{build_mock_plan, mock_payload, MockSource};
use super::store::ServerStatus;
use super::transform::{transform_plan_result, Step};
use crate::models::response::ApiResponse;
use crate::models::settings::ClientConfig;
use crate::utils::error::AppResult;

/// Steps produced for one request, and where they came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOutcome {
    pub steps: Vec<Step>,
    pub server_status: ServerStatus,
}

/// Carries one plan request to the planner endpoint.
#[async_trait]
pub trait PlanTransport: Send + Sync {
    async fn post_plan(&self, task: &str, mode: AgentMode) -> AppResult<ApiResponse<PlanResult>>;
}

#[derive(Serialize)]
struct PlanRequestBody<'a> {
    task: &'a str,
    mode: AgentMode,
}

/// reqwest-backed transport with a fixed request timeout
pub struct HttpPlanTransport {
    client: reqwest::Client,
    api_url: String,
}

impl HttpPlanTransport {
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }
}

#[async_trait]
impl PlanTransport for HttpPlanTransport {
    async fn post_plan(&self, task: &str, mode: AgentMode) -> AppResult<ApiResponse<PlanResult>> {
        let response = self
            .client
            .post(&self.api_url)
            .json(&PlanRequestBody { task, mode })
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<ApiResponse<PlanResult>>().await?)
    }
}

/// Presentation-side entry point for plan requests
pub struct PlanAdapter {
    transport: Arc<dyn PlanTransport>,
    fallback: MockSource,
}

impl PlanAdapter {
    pub fn new(transport: Arc<dyn PlanTransport>) -> Self {
        Self {
            transport,
            fallback: mock_payload,
        }
    }

    /// Adapter talking HTTP to the configured endpoint
    pub fn from_config(config: &ClientConfig) -> AppResult<Self> {
        Ok(Self::new(Arc::new(HttpPlanTransport::new(config)?)))
    }

    /// Replace the canned payload used on fallback.
    pub fn with_fallback(mut self, fallback: MockSource) -> Self {
        self.fallback = fallback;
        self
    }

    /// Request a plan, substituting the mock plan on any transport failure.
    ///
    /// The only error is a mock payload that cannot be decoded.
    pub async fn request_plan(&self, task: &str, mode: AgentMode) -> AppResult<PlanOutcome> {
        match self.transport.post_plan(task, mode).await {
            Ok(envelope) if envelope.is_verified_success() => match envelope.into_payload() {
                Some(result) => {
                    return Ok(PlanOutcome {
                        steps: transform_plan_result(&result, mode),
                        server_status: ServerStatus::Live,
                    });
                }
                None => tracing::warn!("planner answered success without a plan payload"),
            },
            Ok(envelope) => tracing::warn!(
                status_code = envelope.status_code,
                message = envelope.message().unwrap_or_default(),
                "planner answered unsuccessfully"
            ),
            Err(err) => tracing::warn!(error = %err, "plan request failed"),
        }

        tracing::info!(%mode, "using mocked plan");
        Ok(PlanOutcome {
            steps: build_mock_plan(mode, self.fallback)?,
            server_status: ServerStatus::Mocked,
        })
    }
}
