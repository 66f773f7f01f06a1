//! Services
//!
//! Business logic for both sides of the planner.

pub mod planner;
pub mod presentation;

pub use planner::PlannerService;
pub use presentation::{PlanAdapter, PlanController, PlanStore};
