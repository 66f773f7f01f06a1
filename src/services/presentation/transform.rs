//! Step Transform
//!
//! Maps a `PlanResult` onto the ordered steps the plan view renders.

use serde::{Deserialize, Serialize};
use task_planner_core::{AgentMode, PlanResult};

/// Language attached to every generated step.
pub const DEFAULT_LANGUAGE: &str = "python";

/// Id of the single step produced in normal mode.
pub const DIRECT_CODE_STEP_ID: &str = "direct-code";

/// Manual verdict a user can attach to a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepFeedback {
    #[serde(rename = "works")]
    Works,
    #[serde(rename = "doesnt-work")]
    DoesntWork,
}

/// A renderable plan step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default)]
    pub feedback: Option<StepFeedback>,
}

impl Step {
    fn with_code(id: impl Into<String>, title: impl Into<String>, code: String) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            detail: None,
            code: Some(code),
            language: Some(DEFAULT_LANGUAGE.to_string()),
            feedback: None,
        }
    }
}

/// Build the steps for a plan result.
///
/// Normal mode yields exactly one `direct-code` step. Planner mode yields one
/// step per plan entry, each carrying the full joined code block.
pub fn transform_plan_result(result: &PlanResult, mode: AgentMode) -> Vec<Step> {
    let code = result.code.joined();

    match mode {
        AgentMode::Normal => vec![Step::with_code(
            DIRECT_CODE_STEP_ID,
            "Generated Code",
            code,
        )],
        AgentMode::Planner => result
            .plan_entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| Step::with_code(format!("step-{}", i + 1), entry.clone(), code.clone()))
            .collect(),
    }
}
