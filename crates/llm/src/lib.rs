//! Task Planner LLM
//!
//! Provides a unified interface for chat-completion LLM providers:
//! - Groq (OpenAI-compatible endpoint, the default)
//! - OpenAI
//!
//! Also includes the HTTP client factory shared by the providers.

pub mod http_client;
pub mod openai;
pub mod provider;
pub mod types;

// Re-export main types
pub use http_client::build_http_client;
pub use openai::OpenAIProvider;
pub use provider::LlmProvider;
pub use types::*;
