//! Task Planner Core
//!
//! Foundational types for the Task Planner workspace. This crate has zero
//! dependencies on application-level code (HTTP server, LLM providers, etc.).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `plan` - Plan request/result types exchanged over the wire and their
//!   field validation (`PlanRequest`, `PlanResult`, `CodeBlock`, `FieldViolation`)
//!
//! ## Design Principles
//!
//! 1. **Zero external dependencies beyond serde/thiserror** - keeps build times minimal
//! 2. **One wire shape** - the server and the presentation side decode the same types
//! 3. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod error;
pub mod plan;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Plan Types ─────────────────────────────────────────────────────────
pub use plan::{
    join_violations, AgentMode, CodeBlock, FieldViolation, PlanRequest, PlanResult,
};
