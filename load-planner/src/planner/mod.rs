//! Trip planning and backhaul pairing.
//!
//! This module answers two questions for a driver sitting at home with an
//! empty truck:
//!
//! - "Which chain of loads should I haul before coming home?" ([`TripPlanner`])
//! - "Which outbound load has the best return load to go with it?"
//!   ([`BackhaulPairer`])
//!
//! Both work against a [`LoadSource`] and, for the trip planner, a
//! [`DistanceOracle`]. Lookup failures degrade the answer rather than abort it.

mod backhaul;
mod config;
mod gather;
mod metrics;
mod score;
mod select;
mod source;
mod stitch;
mod trip;

#[cfg(test)]
pub(crate) mod testing;

pub use backhaul::{BackhaulPairer, BackhaulRequest, return_date};
pub use config::PlannerConfig;
pub use gather::gather_candidates;
pub use metrics::{RouteMetrics, route_metrics};
pub use score::{load_score, pair_score, plan_score, time_penalty};
pub use select::select_best;
pub use source::{DistanceOracle, Drive, LoadQuery, LoadSource, LoadSourceError};
pub use stitch::stitch;
pub use trip::{PlanError, PlannedTrip, StopReason, TripPlanner, TripRequest};
