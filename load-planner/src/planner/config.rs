//! Configuration for trip planning and backhaul pairing.

use std::time::Duration;

/// Tuning parameters for the planner.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Time allowed for a single load-source lookup (seconds).
    /// Slower lookups are treated as returning no loads.
    pub lookup_timeout_secs: u64,

    /// How many days after the requested date a pickup may be and
    /// still count as a candidate.
    pub ship_window_days: i64,

    /// Maximum number of outbound loads explored for return legs.
    pub outbound_limit: usize,

    /// Number of return options kept per outbound load.
    pub pairs_per_outbound: usize,

    /// Number of best-scoring candidates the single-leg selector compares.
    pub selector_pool: usize,

    /// Maximum number of return-leg searches in flight at once.
    pub backhaul_concurrency: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        lookup_timeout_secs: u64,
        ship_window_days: i64,
        outbound_limit: usize,
        pairs_per_outbound: usize,
        selector_pool: usize,
        backhaul_concurrency: usize,
    ) -> Self {
        Self {
            lookup_timeout_secs,
            ship_window_days,
            outbound_limit,
            pairs_per_outbound,
            selector_pool,
            backhaul_concurrency,
        }
    }

    /// Set the lookup timeout.
    pub fn with_lookup_timeout(mut self, secs: u64) -> Self {
        self.lookup_timeout_secs = secs;
        self
    }

    /// Set the backhaul fan-out ceiling.
    pub fn with_backhaul_concurrency(mut self, n: usize) -> Self {
        self.backhaul_concurrency = n;
        self
    }

    /// Returns the lookup timeout as a Duration.
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_secs: 15,
            ship_window_days: 3,
            outbound_limit: 20,
            pairs_per_outbound: 3,
            selector_pool: 3,
            backhaul_concurrency: 5,
        }
    }
}
