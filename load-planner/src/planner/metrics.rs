//! Aggregate figures for a stitched route.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::Route;

/// Summary of a route's economics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    /// Revenue from paid loads
    pub total_revenue: f64,

    /// Miles driven, loaded and empty
    pub total_miles: f64,

    /// Empty miles
    pub total_deadhead: f64,

    /// Revenue per loaded mile
    pub rate_per_mile: f64,

    /// Calendar days from first pickup to final arrival, inclusive
    pub total_days: i64,

    /// Number of paid loads
    pub total_loads: usize,
}

/// Compute the metrics for `route`.
///
/// Never fails: a route with no loaded miles has a rate of 0, and one whose
/// dates can't be determined has 0 days.
pub fn route_metrics(route: &Route) -> RouteMetrics {
    let mut metrics = RouteMetrics::default();

    for segment in route.segments() {
        metrics.total_miles += segment.distance();
        if segment.is_deadhead() {
            metrics.total_deadhead += segment.distance();
        } else {
            metrics.total_revenue += segment.revenue();
            metrics.total_loads += 1;
        }
    }

    let loaded_miles = metrics.total_miles - metrics.total_deadhead;
    metrics.rate_per_mile = if loaded_miles > 0.0 {
        metrics.total_revenue / loaded_miles
    } else {
        0.0
    };

    metrics.total_days = match (route.start_date(), route.end_date()) {
        (Some(start), Some(end)) => (end - start).num_days() + 1,
        _ => {
            warn!(segments = route.len(), "Route has no usable dates; reporting 0 days");
            0
        }
    };

    metrics
}
