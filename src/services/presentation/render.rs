//! Plan View
//!
//! Plain-text rendering of a `PlanStore`.

use std::fmt::Write as FmtWrite;

use task_planner_core::AgentMode;

use super::store::{PlanStore, ServerStatus};
use super::transform::{Step, StepFeedback};

fn feedback_marker(feedback: Option<StepFeedback>) -> &'static str {
    match feedback {
        Some(StepFeedback::Works) => " [works]",
        Some(StepFeedback::DoesntWork) => " [doesn't work]",
        None => "",
    }
}

fn write_code_snippet(out: &mut String, step: &Step) {
    let language = step.language.as_deref().unwrap_or("");
    if language.is_empty() {
        writeln!(out, "   Code snippet").unwrap();
    } else {
        writeln!(out, "   Code snippet · {}", language).unwrap();
    }

    match step.code.as_deref().filter(|c| !c.is_empty()) {
        Some(code) => {
            writeln!(out, "   ```{}", language).unwrap();
            for line in code.lines() {
                writeln!(out, "   {}", line).unwrap();
            }
            writeln!(out, "   ```").unwrap();
        }
        None => writeln!(out, "   // No code provided").unwrap(),
    }
}

/// Render the plan view the way the UI lays it out.
pub fn render_plan_view(store: &PlanStore) -> String {
    if store.loading() {
        return "Generating…".to_string();
    }

    if let Some(error) = store.error() {
        return format!("Error: {}", error);
    }

    if !store.has_steps() {
        return "No plan yet. Enter a task above to generate one.".to_string();
    }

    let mut out = String::new();
    let status = match store.server_status() {
        ServerStatus::Live => "Data fetched from external API.",
        _ => "External API unreachable. Using mocked data.",
    };
    let stats = store.feedback_stats();
    writeln!(out, "{}", status).unwrap();
    writeln!(
        out,
        "Evaluation Status: {} Works, {} Issues, {} Not Evaluated",
        stats.works, stats.doesnt_work, stats.not_evaluated
    )
    .unwrap();

    for (idx, step) in store.steps().iter().enumerate() {
        writeln!(
            out,
            "\n{}. {}{}",
            idx + 1,
            step.title,
            feedback_marker(step.feedback)
        )
        .unwrap();

        if store.mode() == AgentMode::Planner {
            if let Some(detail) = &step.detail {
                writeln!(out, "   {}", detail).unwrap();
            }
        }

        // an expanded step always shows its snippet, even an empty one
        if store.is_expanded(&step.id) {
            write_code_snippet(&mut out, step);
        }
    }

    out
}
