//! Settings Models
//!
//! Application configuration and settings data structures.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use task_planner_llm::ProviderConfig;

/// How much failure detail the server hands back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Posture {
    /// Error responses include the underlying cause.
    Development,
    /// Error responses carry only a generic message.
    Production,
}

impl Default for Posture {
    fn default() -> Self {
        Self::Development
    }
}

impl std::str::FromStr for Posture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Posture::Development),
            "production" | "prod" => Ok(Posture::Production),
            other => Err(format!("Invalid posture: {}", other)),
        }
    }
}

/// Settings for the presentation-side plan client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Full URL of the planner endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_api_url() -> String {
    "http://localhost:8000/api/v1/planner".to_string()
}

fn default_timeout_ms() -> u64 {
    3500
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}

/// Application configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Error-detail posture
    #[serde(default)]
    pub posture: Posture,
    /// Upstream LLM provider
    #[serde(default)]
    pub llm: ProviderConfig,
    /// Plan client settings
    #[serde(default)]
    pub client: ClientConfig,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8000".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            posture: Posture::default(),
            llm: ProviderConfig::default(),
            client: ClientConfig::default(),
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub bind_addr: Option<String>,
    pub posture: Option<Posture>,
    pub api_key: Option<String>,
    pub llm_base_url: Option<String>,
    pub client_api_url: Option<String>,
}

impl SettingsUpdate {
    /// Collect overrides from environment-style lookups.
    ///
    /// Recognised keys: the provider's credential variable (`GROQ_API_KEY` or
    /// `OPENAI_API_KEY`), `PLANNER_LLM_BASE_URL`, `PLAN_API_URL` and
    /// `PLANNER_POSTURE`. Unparsable postures are ignored.
    pub fn from_env<F>(config: &AppConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            bind_addr: None,
            posture: non_empty("PLANNER_POSTURE").and_then(|v| v.parse().ok()),
            api_key: non_empty(config.llm.provider.api_key_env()),
            llm_base_url: non_empty("PLANNER_LLM_BASE_URL"),
            client_api_url: non_empty("PLAN_API_URL"),
        }
    }
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(bind_addr) = update.bind_addr {
            self.bind_addr = bind_addr;
        }
        if let Some(posture) = update.posture {
            self.posture = posture;
        }
        if let Some(api_key) = update.api_key {
            self.llm.api_key = Some(api_key);
        }
        if let Some(base_url) = update.llm_base_url {
            self.llm.base_url = Some(base_url);
        }
        if let Some(api_url) = update.client_api_url {
            self.client.api_url = api_url;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(format!(
                "Invalid bind_addr: {}. Must be an ip:port socket address",
                self.bind_addr
            ));
        }

        if self.llm.model.trim().is_empty() {
            return Err("llm.model must not be empty".to_string());
        }

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(format!(
                "Invalid llm.temperature: {}. Must be between 0 and 2",
                self.llm.temperature
            ));
        }

        if self.llm.max_tokens == 0 {
            return Err("llm.max_tokens must be greater than 0".to_string());
        }

        if self.llm.timeout_secs == Some(0) {
            return Err("llm.timeout_secs must be greater than 0".to_string());
        }

        if let Some(base_url) = &self.llm.base_url {
            if !is_http_url(base_url) {
                return Err(format!("Invalid llm.base_url: {}", base_url));
            }
        }

        if !is_http_url(&self.client.api_url) {
            return Err(format!("Invalid client.api_url: {}", self.client.api_url));
        }

        if self.client.timeout_ms == 0 {
            return Err("client.timeout_ms must be greater than 0".to_string());
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
