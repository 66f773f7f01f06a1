//! Planner Commands

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use task_planner_core::PlanResult;

use crate::models::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/planner
///
/// Always answers with the envelope, including for bodies that are not JSON.
pub async fn generate_plan(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResponse<PlanResult> {
    match body {
        Ok(Json(body)) => state.planner().generate_plan(&body).await,
        Err(rejection) => {
            tracing::info!(reason = %rejection.body_text(), "rejected unreadable plan request");
            ApiResponse::err(400, "request body must be a JSON object")
        }
    }
}
