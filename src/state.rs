//! Application State
//!
//! Shared state handed to every request handler.

use std::sync::Arc;

use task_planner_llm::{LlmProvider, OpenAIProvider};

use crate::models::settings::AppConfig;
use crate::services::planner::PlannerService;
use crate::utils::error::AppResult;

/// State shared by the HTTP handlers
pub struct AppState {
    config: AppConfig,
    planner: PlannerService,
}

impl AppState {
    /// Build the state around an already-constructed provider
    pub fn new(config: AppConfig, provider: Arc<dyn LlmProvider>) -> Self {
        let planner = PlannerService::new(provider, config.posture);
        Self { config, planner }
    }

    /// Build the state with the provider described by the configuration
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        if config.llm.api_key.is_none() {
            tracing::warn!(
                provider = %config.llm.provider,
                env = config.llm.provider.api_key_env(),
                "no API key configured; plan requests will fail"
            );
        }
        let provider = OpenAIProvider::new(config.llm.clone())?;
        Ok(Self::new(config, Arc::new(provider)))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn planner(&self) -> &PlannerService {
        &self.planner
    }

    /// Whether the provider has a credential to call the model with
    pub fn has_credential(&self) -> bool {
        self.planner.provider().config().api_key.is_some()
    }
}
