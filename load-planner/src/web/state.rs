//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedDistanceOracle;
use crate::distance::RoutesClient;
use crate::loadboard::JsonLoadBoard;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Load board searched for candidate loads
    pub board: Arc<JsonLoadBoard>,

    /// Cached driving-distance lookups, shared across requests
    pub distances: Arc<CachedDistanceOracle<RoutesClient>>,

    /// Planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        board: JsonLoadBoard,
        distances: CachedDistanceOracle<RoutesClient>,
        config: PlannerConfig,
    ) -> Self {
        Self {
            board: Arc::new(board),
            distances: Arc::new(distances),
            config: Arc::new(config),
        }
    }
}
