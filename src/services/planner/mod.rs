//! Plan Request Normalizer
//!
//! Validates plan requests, asks the model for a plan and repairs whatever
//! text comes back into a well-formed `PlanResult`.

pub mod prompt;
pub mod repair;
pub mod service;

pub use prompt::{build_prompt, SYSTEM_PROMPT};
pub use repair::{normalize_reply, parse_model_reply, ParsedReply};
pub use service::PlannerService;
