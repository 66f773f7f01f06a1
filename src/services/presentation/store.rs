//! Plan Store
//!
//! Client-side state the plan view binds to. Every request is tagged with a
//! generation so a late response can never overwrite a newer one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use task_planner_core::AgentMode;

use super::client::PlanOutcome;
use super::transform::{Step, StepFeedback};
use crate::utils::error::{AppError, AppResult};

/// Where the current steps came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    #[default]
    Idle,
    Live,
    Mocked,
}

/// Proof that a request was started, checked when it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Feedback counts across the current steps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackStats {
    pub works: usize,
    pub doesnt_work: usize,
    pub not_evaluated: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PlanStore {
    task: String,
    mode: AgentMode,
    steps: Vec<Step>,
    expanded: HashMap<String, bool>,
    loading: bool,
    error: Option<String>,
    server_status: ServerStatus,
    generation: u64,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_task(&mut self, task: impl Into<String>) {
        self.task = task.into();
    }

    pub fn set_mode(&mut self, mode: AgentMode) {
        self.mode = mode;
    }

    /// Mark a request as in flight.
    ///
    /// Fails with `Busy` while another request is still loading.
    pub fn begin_request(&mut self) -> AppResult<RequestTicket> {
        if self.loading {
            return Err(AppError::busy("a plan request is already in flight"));
        }
        self.loading = true;
        self.error = None;
        self.generation += 1;
        Ok(RequestTicket {
            generation: self.generation,
        })
    }

    fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a completed request. Returns `false` for a stale ticket.
    pub fn fulfill(&mut self, ticket: &RequestTicket, outcome: PlanOutcome) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(generation = ticket.generation, "dropping stale plan outcome");
            return false;
        }
        self.expanded = outcome
            .steps
            .iter()
            .map(|s| (s.id.clone(), false))
            .collect();
        self.steps = outcome.steps;
        self.server_status = outcome.server_status;
        self.loading = false;
        true
    }

    /// Record a failed request. Returns `false` for a stale ticket.
    pub fn reject(&mut self, ticket: &RequestTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.steps.clear();
        self.expanded.clear();
        self.error = Some(message.into());
        self.loading = false;
        true
    }

    pub fn toggle_step_expanded(&mut self, id: &str) {
        let flag = self.expanded.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
    }

    pub fn expand_all(&mut self) {
        for step in &self.steps {
            self.expanded.insert(step.id.clone(), true);
        }
    }

    pub fn collapse_all(&mut self) {
        for step in &self.steps {
            self.expanded.insert(step.id.clone(), false);
        }
    }

    /// Set a step's feedback. Setting the value it already has clears it.
    ///
    /// Returns `false` when no step has the given id.
    pub fn set_step_feedback(&mut self, id: &str, feedback: StepFeedback) -> bool {
        match self.steps.iter_mut().find(|s| s.id == id) {
            Some(step) => {
                step.feedback = if step.feedback == Some(feedback) {
                    None
                } else {
                    Some(feedback)
                };
                true
            }
            None => false,
        }
    }

    /// Reset to the idle state. In-flight requests become stale.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.expanded.clear();
        self.error = None;
        self.loading = false;
        self.server_status = ServerStatus::Idle;
        self.generation += 1;
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn mode(&self) -> AgentMode {
        self.mode
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    pub fn has_steps(&self) -> bool {
        !self.steps.is_empty()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn server_status(&self) -> ServerStatus {
        self.server_status
    }

    pub fn feedback_stats(&self) -> FeedbackStats {
        self.steps
            .iter()
            .fold(FeedbackStats::default(), |mut acc, step| {
                match step.feedback {
                    Some(StepFeedback::Works) => acc.works += 1,
                    Some(StepFeedback::DoesntWork) => acc.doesnt_work += 1,
                    None => acc.not_evaluated += 1,
                }
                acc
            })
    }
}
