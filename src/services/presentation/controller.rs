//! Plan Controller
//!
//! Drives one request lifecycle against a shared `PlanStore`.

use std::sync::Arc;

use task_planner_core::AgentMode;
use tokio::sync::RwLock;

use super::client::PlanAdapter;
use super::store::PlanStore;
use crate::utils::error::AppResult;

pub struct PlanController {
    store: Arc<RwLock<PlanStore>>,
    adapter: Arc<PlanAdapter>,
}

impl PlanController {
    pub fn new(adapter: PlanAdapter) -> Self {
        Self {
            store: Arc::new(RwLock::new(PlanStore::new())),
            adapter: Arc::new(adapter),
        }
    }

    /// Shared handle to the store, for rendering and user actions.
    pub fn store(&self) -> Arc<RwLock<PlanStore>> {
        Arc::clone(&self.store)
    }

    /// Request a plan and apply the outcome to the store.
    ///
    /// Returns `Ok(false)` when the store moved on before the response
    /// arrived. Fails with `Busy` if a request is already loading; a failed
    /// mock construction is recorded in the store and returned.
    pub async fn generate(&self, task: &str, mode: AgentMode) -> AppResult<bool> {
        let ticket = {
            let mut store = self.store.write().await;
            store.set_task(task);
            store.set_mode(mode);
            store.begin_request()?
        };

        // the lock is not held across the request
        let outcome = self.adapter.request_plan(task, mode).await;

        let mut store = self.store.write().await;
        match outcome {
            Ok(outcome) => Ok(store.fulfill(&ticket, outcome)),
            Err(err) => {
                tracing::error!(error = %err, "failed to build a plan");
                store.reject(&ticket, err.to_string());
                Err(err)
            }
        }
    }
}
