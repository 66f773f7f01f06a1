//! Planner Endpoint Integration Tests
//!
//! POST /api/v1/planner and GET /api/v1/health over real HTTP.

use serde_json::{json, Value};
use task_planner::Posture;
use task_planner_llm::LlmError;

use crate::support::{spawn_server, ScriptedProvider};

async fn post(url: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(url)
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

// ============================================================================
// Successful Requests
// ============================================================================

#[tokio::test]
async fn test_planner_mode_returns_plan_and_code_lines() {
    let provider = ScriptedProvider::replying(
        "```json\n{\"plan\": [\"Set up\", \"Write handler\"], \"code\": \"import os\\nprint(os.name)\"}\n```",
    );
    let server = spawn_server(provider.clone(), Posture::Production).await;

    let (status, body) = post(
        &server.planner_url(),
        json!({"task": "print the os name", "mode": "planner"}),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["statusCode"], 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["plan"], json!(["Set up", "Write handler"]));
    assert_eq!(body["data"]["code"], json!(["import os", "print(os.name)"]));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_normal_mode_omits_plan() {
    let provider = ScriptedProvider::replying(
        "Here is your code:\n{\"plan\": [\"unused\"], \"code\": [\"print('hi')\"]}\nEnjoy!",
    );
    let server = spawn_server(provider, Posture::Production).await;

    let (status, body) = post(
        &server.planner_url(),
        json!({"task": "say hi", "mode": "normal"}),
    )
    .await;

    assert_eq!(status, 200);
    assert!(body["data"].get("plan").is_none());
    assert_eq!(body["data"]["code"], json!(["print('hi')"]));
}

#[tokio::test]
async fn test_code_is_always_a_list() {
    for reply in [
        r#"{"code": "a\nb"}"#,
        r#"{"code": ["a", "b"]}"#,
        r#"{"code": null}"#,
        r#"{}"#,
    ] {
        let server = spawn_server(ScriptedProvider::replying(reply), Posture::Production).await;
        let (status, body) = post(
            &server.planner_url(),
            json!({"task": "t", "mode": "normal"}),
        )
        .await;
        assert_eq!(status, 200);
        assert!(body["data"]["code"].is_array(), "reply {reply} gave {body}");
    }
}

// ============================================================================
// Rejected Requests
// ============================================================================

#[tokio::test]
async fn test_validation_failure_does_not_call_model() {
    let provider = ScriptedProvider::replying("{}");
    let server = spawn_server(provider.clone(), Posture::Production).await;

    let (status, body) = post(
        &server.planner_url(),
        json!({"task": "", "mode": "planner"}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({"statusCode": 400, "success": false, "data": "task should not be empty"})
    );

    let (status, body) = post(
        &server.planner_url(),
        json!({"task": "ok", "mode": "verbose"}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(
        body["data"],
        "mode must be one of the following values: planner, normal"
    );

    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_unreadable_body_gets_envelope() {
    let server = spawn_server(ScriptedProvider::replying("{}"), Posture::Production).await;

    let response = reqwest::Client::new()
        .post(server.planner_url())
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["statusCode"], 400);
}

// ============================================================================
// Upstream Failures
// ============================================================================

#[tokio::test]
async fn test_empty_model_reply() {
    let provider = ScriptedProvider::new(vec![Ok(None)]);
    let server = spawn_server(provider, Posture::Production).await;

    let (status, body) = post(&server.planner_url(), json!({"task": "t", "mode": "planner"})).await;
    assert_eq!(status, 500);
    assert_eq!(body["data"], "No content received from the model");
}

#[tokio::test]
async fn test_unrepairable_model_reply() {
    let provider = ScriptedProvider::replying("sorry, I can't do that");
    let server = spawn_server(provider, Posture::Production).await;

    let (status, body) = post(&server.planner_url(), json!({"task": "t", "mode": "planner"})).await;
    assert_eq!(status, 500);
    assert_eq!(body["data"], "Invalid JSON response from the model");
}

#[tokio::test]
async fn test_provider_error_detail_depends_on_posture() {
    let failure = || {
        Err(LlmError::RateLimited {
            message: "slow down".to_string(),
            retry_after: None,
        })
    };

    let server = spawn_server(ScriptedProvider::new(vec![failure()]), Posture::Production).await;
    let (status, body) = post(&server.planner_url(), json!({"task": "t", "mode": "normal"})).await;
    assert_eq!(status, 500);
    assert_eq!(body["data"], "Internal server error");

    let server = spawn_server(ScriptedProvider::new(vec![failure()]), Posture::Development).await;
    let (_, body) = post(&server.planner_url(), json!({"task": "t", "mode": "normal"})).await;
    let message = body["data"].as_str().unwrap();
    assert!(message.starts_with("Internal server error: "));
    assert!(message.contains("slow down"));
}

// ============================================================================
// Health and CORS
// ============================================================================

#[tokio::test]
async fn test_health() {
    let server = spawn_server(ScriptedProvider::replying("{}"), Posture::Production).await;

    let body: Value = reqwest::get(server.url("/api/v1/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["statusCode"], 200);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["service"], "task-planner");
    assert_eq!(body["data"]["provider"], "scripted");
    assert_eq!(body["data"]["model"], "scripted-model");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let server = spawn_server(ScriptedProvider::replying("{}"), Posture::Production).await;

    let response = reqwest::Client::new()
        .get(server.url("/api/v1/health"))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
