//! Presentation Integration Tests
//!
//! The plan adapter against a live server, a closed port, a slow server and
//! a failing server.

use std::time::Duration;

use axum::routing::post;
use axum::Router;
use task_planner::services::presentation::{
    build_mock_plan, mock_payload, render_plan_view, PlanAdapter, PlanController, ServerStatus,
    StepFeedback,
};
use task_planner::{ClientConfig, Posture};
use task_planner_core::AgentMode;
use task_planner_llm::LlmError;
use tokio::net::TcpListener;

use crate::support::{closed_addr, spawn_server, ScriptedProvider};

fn client_config(api_url: String) -> ClientConfig {
    ClientConfig {
        api_url,
        timeout_ms: 1000,
    }
}

// ============================================================================
// Live and Mocked Outcomes
// ============================================================================

#[tokio::test]
async fn test_live_planner_outcome() {
    let provider = ScriptedProvider::replying(
        r#"{"plan": ["Create model", "Add route"], "code": ["class Todo:", "    pass"]}"#,
    );
    let server = spawn_server(provider, Posture::Production).await;
    let adapter = PlanAdapter::from_config(&client_config(server.planner_url())).unwrap();

    let outcome = adapter.request_plan("todo api", AgentMode::Planner).await.unwrap();
    assert_eq!(outcome.server_status, ServerStatus::Live);
    assert_eq!(outcome.steps.len(), 2);
    assert_eq!(outcome.steps[0].id, "step-1");
    assert_eq!(outcome.steps[1].title, "Add route");
    assert_eq!(outcome.steps[1].code.as_deref(), Some("class Todo:\n    pass"));
}

#[tokio::test]
async fn test_live_normal_outcome() {
    let provider = ScriptedProvider::replying(r#"{"code": "print(1)\nprint(2)"}"#);
    let server = spawn_server(provider, Posture::Production).await;
    let adapter = PlanAdapter::from_config(&client_config(server.planner_url())).unwrap();

    let outcome = adapter.request_plan("count", AgentMode::Normal).await.unwrap();
    assert_eq!(outcome.server_status, ServerStatus::Live);
    assert_eq!(outcome.steps.len(), 1);
    assert_eq!(outcome.steps[0].id, "direct-code");
    assert_eq!(outcome.steps[0].code.as_deref(), Some("print(1)\nprint(2)"));
}

#[tokio::test]
async fn test_unreachable_server_uses_mock() {
    let addr = closed_addr().await;
    let adapter =
        PlanAdapter::from_config(&client_config(format!("http://{}/api/v1/planner", addr)))
            .unwrap();

    for mode in [AgentMode::Planner, AgentMode::Normal] {
        let outcome = adapter.request_plan("anything", mode).await.unwrap();
        assert_eq!(outcome.server_status, ServerStatus::Mocked);
        assert_eq!(outcome.steps, build_mock_plan(mode, mock_payload).unwrap());
    }
}

#[tokio::test]
async fn test_slow_server_times_out_to_mock() {
    let app = Router::new().route(
        "/api/v1/planner",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "too late"
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let config = ClientConfig {
        api_url: format!("http://{}/api/v1/planner", addr),
        timeout_ms: 200,
    };
    let adapter = PlanAdapter::from_config(&config).unwrap();

    let started = std::time::Instant::now();
    let outcome = adapter.request_plan("t", AgentMode::Normal).await.unwrap();
    assert!(started.elapsed() < Duration::from_secs(4));
    assert_eq!(outcome.server_status, ServerStatus::Mocked);
    assert_eq!(outcome.steps[0].id, "direct-code");

    handle.abort();
}

#[tokio::test]
async fn test_server_error_uses_mock() {
    let provider = ScriptedProvider::new(vec![Err(LlmError::NetworkError {
        message: "upstream down".to_string(),
    })]);
    let server = spawn_server(provider, Posture::Production).await;
    let adapter = PlanAdapter::from_config(&client_config(server.planner_url())).unwrap();

    let outcome = adapter.request_plan("t", AgentMode::Planner).await.unwrap();
    assert_eq!(outcome.server_status, ServerStatus::Mocked);
    assert_eq!(outcome.steps.len(), 6);
}

#[tokio::test]
async fn test_validation_error_uses_mock() {
    let server = spawn_server(ScriptedProvider::replying("{}"), Posture::Production).await;
    let adapter = PlanAdapter::from_config(&client_config(server.planner_url())).unwrap();

    let outcome = adapter.request_plan("", AgentMode::Normal).await.unwrap();
    assert_eq!(outcome.server_status, ServerStatus::Mocked);
}

// ============================================================================
// Controller and View
// ============================================================================

#[tokio::test]
async fn test_controller_drives_store_and_view() {
    let provider = ScriptedProvider::replying(
        r#"{"plan": ["Design", "Build", "Ship"], "code": ["x = 1"]}"#,
    );
    let server = spawn_server(provider, Posture::Production).await;
    let adapter = PlanAdapter::from_config(&client_config(server.planner_url())).unwrap();
    let controller = PlanController::new(adapter);

    assert!(controller.generate("ship it", AgentMode::Planner).await.unwrap());

    let store = controller.store();
    let mut store = store.write().await;
    assert_eq!(store.server_status(), ServerStatus::Live);
    assert_eq!(store.steps().len(), 3);

    store.toggle_step_expanded("step-2");
    store.set_step_feedback("step-1", StepFeedback::Works);
    store.set_step_feedback("step-3", StepFeedback::DoesntWork);

    let view = render_plan_view(&store);
    assert!(view.starts_with("Data fetched from external API.\n"));
    assert!(view.contains("Evaluation Status: 1 Works, 1 Issues, 1 Not Evaluated"));
    assert!(view.contains("1. Design [works]\n"));
    assert!(view.contains("2. Build\n   Code snippet · python\n   ```python\n   x = 1\n   ```\n"));
    assert!(view.contains("3. Ship [doesn't work]\n"));
}

#[tokio::test]
async fn test_controller_mocked_view() {
    let addr = closed_addr().await;
    let adapter =
        PlanAdapter::from_config(&client_config(format!("http://{}/api/v1/planner", addr)))
            .unwrap();
    let controller = PlanController::new(adapter);

    assert!(controller.generate("t", AgentMode::Normal).await.unwrap());

    let store = controller.store();
    let store = store.read().await;
    let view = render_plan_view(&store);
    assert!(view.starts_with("External API unreachable. Using mocked data.\n"));
    assert!(view.contains("1. Generated Code\n"));
}
