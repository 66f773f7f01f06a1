//! HTTP Commands
//!
//! Route handlers for the planner API and the router that mounts them.

pub mod health;
pub mod planner;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;
use crate::utils::error::AppResult;

pub use health::get_health;
pub use planner::generate_plan;

/// Versioned path prefix shared by every route
pub const API_PREFIX: &str = "/api/v1";

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any)
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/planner", post(generate_plan))
        .route("/health", get(get_health));

    Router::new()
        .nest(API_PREFIX, api)
        .layer(cors_layer())
        .with_state(state)
}

/// Serve the router on an already-bound listener until the task is dropped.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> AppResult<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "planner API listening");
    }
    axum::serve(listener, router(state)).await?;
    Ok(())
}
