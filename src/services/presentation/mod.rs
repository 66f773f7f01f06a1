//! Plan Presentation Adapter
//!
//! Client side of the planner: fetches plans with a mock fallback, turns them
//! into steps and keeps the view state those steps are rendered from.

pub mod client;
pub mod controller;
pub mod mock;
pub mod render;
pub mod store;
pub mod transform;

pub use client::{HttpPlanTransport, PlanAdapter, PlanOutcome, PlanTransport};
pub use controller::PlanController;
pub use mock::{build_mock_plan, mock_payload};
pub use render::render_plan_view;
pub use store::{FeedbackStats, PlanStore, RequestTicket, ServerStatus};
pub use transform::{transform_plan_result, Step, StepFeedback, DEFAULT_LANGUAGE};
