//! Shared fixtures for the integration suite.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use task_planner::{AppConfig, AppState, Posture};
use task_planner_llm::{LlmError, LlmProvider, LlmResponse, LlmResult, Message, ProviderConfig};
use tokio::net::TcpListener;

/// Provider that answers from a script, one reply per call.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<LlmResult<Option<String>>>>,
    calls: AtomicUsize,
    config: ProviderConfig,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<LlmResult<Option<String>>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: AtomicUsize::new(0),
            config: ProviderConfig {
                api_key: Some("gsk-test".to_string()),
                ..Default::default()
            },
        })
    }

    /// Provider that answers every call with the same text.
    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(vec![Ok(Some(text.to_string())); 8])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn send_message(
        &self,
        _messages: Vec<Message>,
        _system: Option<String>,
    ) -> LlmResult<LlmResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(Ok(content)) => Ok(LlmResponse {
                content,
                ..LlmResponse::text("", "scripted-model")
            }),
            Some(Err(err)) => Err(err),
            None => Err(LlmError::Other {
                message: "script exhausted".to_string(),
            }),
        }
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// A running planner server.
pub struct TestServer {
    pub addr: SocketAddr,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn planner_url(&self) -> String {
        self.url("/api/v1/planner")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn spawn_server(provider: Arc<ScriptedProvider>, posture: Posture) -> TestServer {
    let config = AppConfig {
        posture,
        ..Default::default()
    };
    let state = Arc::new(AppState::new(config, provider));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let _ = task_planner::serve(listener, state).await;
    });
    TestServer { addr, handle }
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
