//! Model Reply Repair
//!
//! Turns the free-form text returned by the model into a JSON object, then
//! coerces that object into the canonical plan/code shape.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use task_planner_core::{AgentMode, CodeBlock, PlanResult};

/// Outcome of parsing a raw model reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedReply {
    /// A JSON object was recovered from the reply.
    Parsed(Map<String, Value>),
    /// Nothing parseable; carries the raw reply.
    Malformed(String),
}

fn fence_pattern() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"```json|```").expect("fence pattern is a valid regex"))
}

/// Remove every ```` ```json ```` and ```` ``` ```` marker and trim.
pub fn strip_code_fences(text: &str) -> String {
    fence_pattern().replace_all(text, "").trim().to_string()
}

/// The greedy brace block: from the first `{` to the last `}`.
pub fn extract_brace_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn parse_object(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Parse a model reply, repairing markdown fences and surrounding prose.
///
/// The fence-stripped text is tried first. When that fails the brace block
/// of the raw reply is tried instead.
pub fn parse_model_reply(raw: &str) -> ParsedReply {
    if let Some(map) = parse_object(&strip_code_fences(raw)) {
        return ParsedReply::Parsed(map);
    }

    if let Some(map) = extract_brace_block(raw).and_then(parse_object) {
        tracing::warn!("model reply needed brace extraction");
        return ParsedReply::Parsed(map);
    }

    ParsedReply::Malformed(raw.to_string())
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn normalize_code(code: Option<&Value>) -> Vec<String> {
    match code {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) => s.split('\n').map(str::to_string).collect(),
        Some(Value::Array(items)) => items.iter().map(value_text).collect(),
        Some(other) => vec![other.to_string()],
    }
}

fn plan_entry(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => ["title", "step", "description"]
            .iter()
            .find_map(|key| obj.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .or_else(|| Some(value.to_string())),
        other => Some(other.to_string()),
    }
}

fn normalize_plan(plan: Option<&Value>) -> Option<Vec<String>> {
    match plan? {
        Value::Null => None,
        Value::Array(items) => Some(items.iter().filter_map(plan_entry).collect()),
        Value::String(s) => Some(
            s.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        other => Some(vec![other.to_string()]),
    }
}

/// Coerce a parsed reply into a `PlanResult`.
///
/// `code` always comes out as a list of lines. `plan` is kept only in
/// planner mode.
pub fn normalize_reply(reply: &Map<String, Value>, mode: AgentMode) -> PlanResult {
    let plan = match mode {
        AgentMode::Planner => normalize_plan(reply.get("plan")),
        AgentMode::Normal => None,
    };

    PlanResult {
        plan,
        code: CodeBlock::Lines(normalize_code(reply.get("code"))),
    }
}
