//! Configuration Integration Tests

use std::io::Write;

use task_planner::{AppError, ConfigService, Posture};
use task_planner_llm::ProviderType;
use tempfile::NamedTempFile;

#[test]
fn test_full_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "bind_addr": "0.0.0.0:8000",
            "posture": "production",
            "llm": {{
                "provider": "openai",
                "model": "gpt-4o-mini",
                "temperature": 0.2,
                "max_tokens": 512
            }},
            "client": {{
                "api_url": "http://planner.local:8000/api/v1/planner",
                "timeout_ms": 1500
            }}
        }}"#
    )
    .unwrap();

    let service = ConfigService::load_with(Some(file.path()), |key| {
        (key == "OPENAI_API_KEY").then(|| "sk-from-env".to_string())
    })
    .unwrap();
    let config = service.get_config();

    assert_eq!(config.posture, Posture::Production);
    assert_eq!(config.llm.provider, ProviderType::OpenAI);
    assert_eq!(config.llm.max_tokens, 512);
    assert_eq!(config.llm.api_key.as_deref(), Some("sk-from-env"));
    assert_eq!(config.client.timeout().as_millis(), 1500);
}

#[test]
fn test_posture_env_override_and_bad_base_url() {
    let service = ConfigService::load_with(None, |key| match key {
        "PLANNER_POSTURE" => Some("prod".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(service.get_config().posture, Posture::Production);

    let err = ConfigService::load_with(None, |key| match key {
        "PLANNER_LLM_BASE_URL" => Some("api.groq.com".to_string()),
        _ => None,
    })
    .unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}
