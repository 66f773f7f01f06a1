//! Health Check Commands

use std::sync::Arc;

use axum::extract::State;

use crate::models::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/v1/health
pub async fn get_health(State(state): State<Arc<AppState>>) -> ApiResponse<HealthResponse> {
    let provider = state.planner().provider();
    let credential = state.has_credential();

    let health = HealthResponse {
        status: if credential { "healthy" } else { "degraded" }.to_string(),
        provider: provider.name().to_string(),
        model: provider.model().to_string(),
        credential,
        ..HealthResponse::default()
    };

    ApiResponse::ok(health)
}
