//! Plan Types
//!
//! The request and result shapes exchanged between the planner endpoint and
//! its clients, plus the field constraint checks applied to incoming requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Generation mode requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentMode {
    /// Break the task into steps, then produce the code.
    Planner,
    /// Produce only the code snippet.
    Normal,
}

impl AgentMode {
    /// All accepted wire values, in declaration order.
    pub const VALUES: [&'static str; 2] = ["planner", "normal"];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentMode::Planner => "planner",
            AgentMode::Normal => "normal",
        }
    }
}

impl Default for AgentMode {
    fn default() -> Self {
        Self::Planner
    }
}

impl fmt::Display for AgentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planner" => Ok(AgentMode::Planner),
            "normal" => Ok(AgentMode::Normal),
            other => Err(format!(
                "unknown mode '{}', expected one of: {}",
                other,
                AgentMode::VALUES.join(", ")
            )),
        }
    }
}

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Join the messages of failed constraints into one human-readable line.
pub fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A validated plan request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub task: String,
    pub mode: AgentMode,
}

impl PlanRequest {
    pub fn new(task: impl Into<String>, mode: AgentMode) -> Self {
        Self {
            task: task.into(),
            mode,
        }
    }

    /// Check an untyped request body against the field constraints.
    ///
    /// Each failing field contributes only its first failing constraint, in
    /// field order (`task`, then `mode`).
    pub fn validate_json(body: &serde_json::Value) -> Result<Self, Vec<FieldViolation>> {
        let Some(obj) = body.as_object() else {
            return Err(vec![FieldViolation::new(
                "body",
                "request body must be a JSON object",
            )]);
        };

        let mut violations = Vec::new();

        let task = match obj.get("task") {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(serde_json::Value::String(_)) | None | Some(serde_json::Value::Null) => {
                violations.push(FieldViolation::new("task", "task should not be empty"));
                None
            }
            Some(_) => {
                violations.push(FieldViolation::new("task", "task must be a string"));
                None
            }
        };

        let mode = match obj.get("mode") {
            Some(serde_json::Value::String(s)) => match s.parse::<AgentMode>() {
                Ok(mode) => Some(mode),
                Err(_) => {
                    violations.push(mode_not_allowed());
                    None
                }
            },
            // membership is checked before type, so a non-string mode is "not allowed"
            _ => {
                violations.push(mode_not_allowed());
                None
            }
        };

        match (task, mode) {
            (Some(task), Some(mode)) if violations.is_empty() => Ok(Self { task, mode }),
            _ => Err(violations),
        }
    }
}

fn mode_not_allowed() -> FieldViolation {
    FieldViolation::new(
        "mode",
        format!(
            "mode must be one of the following values: {}",
            AgentMode::VALUES.join(", ")
        ),
    )
}

/// The `code` field of a plan result: either a list of lines or one string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeBlock {
    Lines(Vec<String>),
    Text(String),
}

impl Default for CodeBlock {
    fn default() -> Self {
        Self::Lines(Vec::new())
    }
}

impl CodeBlock {
    /// The whole block as a single newline-joined string.
    pub fn joined(&self) -> String {
        match self {
            CodeBlock::Lines(lines) => lines.join("\n"),
            CodeBlock::Text(text) => text.clone(),
        }
    }

    /// The block as lines, splitting a single string on `\n`.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            CodeBlock::Lines(lines) => lines,
            CodeBlock::Text(text) => text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CodeBlock::Lines(lines) => lines.is_empty(),
            CodeBlock::Text(text) => text.is_empty(),
        }
    }
}

/// Canonical plan/code record carried in a successful response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResult {
    /// Step titles; only present in planner mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Vec<String>>,
    #[serde(default)]
    pub code: CodeBlock,
}

impl PlanResult {
    /// Decode a result from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> CoreResult<Self> {
        if !value.is_object() {
            return Err(CoreError::parse("plan result must be a JSON object"));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Step titles, empty when the result carries no plan.
    pub fn plan_entries(&self) -> &[String] {
        self.plan.as_deref().unwrap_or(&[])
    }
}
