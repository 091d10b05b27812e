//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedPlannerClient;
use crate::coordinator::RequestCoordinator;
use crate::planning::PlannerClient;

/// The planner stack the server runs against: the HTTP client wrapped in
/// the response cache.
pub type AppPlanner = CachedPlannerClient<PlannerClient>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Coordinator over the cached planner client.
    pub coordinator: Arc<RequestCoordinator<AppPlanner>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(coordinator: RequestCoordinator<AppPlanner>) -> Self {
        Self {
            coordinator: Arc::new(coordinator),
        }
    }
}
