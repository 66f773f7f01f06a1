//! Planner Prompts

use task_planner_core::AgentMode;

/// System instruction sent with every plan request.
pub const SYSTEM_PROMPT: &str = "You are a helpful coding assistant. Always return valid JSON only. \
For code, provide it as an array of strings where each element is one line of code.";

/// Build the user instruction for a task in the given mode.
pub fn build_prompt(task: &str, mode: AgentMode) -> String {
    match mode {
        AgentMode::Planner => format!(
            "Task: {task}.\n\
             First, break this task into 3-7 actionable steps. Then provide the complete, working code solution.\n\
             Return only JSON: {{ \"plan\": [\"step1\", \"step2\", ...], \"code\": [\"line1\", \"line2\", ...] }} \
             or {{ \"plan\": [...], \"code\": \"code string\" }}"
        ),
        AgentMode::Normal => format!(
            "Task: {task}.\n\
             Provide only the essential code snippet for this task, not a full application.\n\
             Return only JSON: {{ \"code\": [\"line1\", \"line2\", ...] }} or {{ \"code\": \"code string\" }}"
        ),
    }
}
