//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{LoadPair, Route};
use crate::planner::RouteMetrics;

/// Request to plan a multi-load trip.
#[derive(Debug, Deserialize)]
pub struct TripPlanRequest {
    /// City the truck starts from and returns to
    pub start_city: String,

    /// State the truck starts from and returns to
    pub start_state: String,

    /// First pickup date, YYYY-MM-DD (defaults to today if unparseable)
    pub start_date: String,

    /// Heaviest load the truck can take, 1,000 to 80,000 lbs
    pub max_weight: u32,

    /// Acceptable truck types (e.g. "V", "R", "RGN")
    pub truck_types: Vec<String>,

    /// Most loads to chain, 1 to 10
    pub max_loads: usize,

    /// Load-board account to search under
    pub home_base_id: Option<String>,
}

/// A planned trip.
#[derive(Debug, Serialize)]
pub struct TripPlanResponse {
    /// Segments from home back to home, deadheads included
    pub route: Route,

    /// Route totals
    #[serde(flatten)]
    pub metrics: RouteMetrics,
}

/// Request to search for outbound/return load pairs.
#[derive(Debug, Deserialize)]
pub struct BackhaulSearchRequest {
    /// Outbound pickup city
    pub origin_city: String,

    /// Outbound pickup state
    pub origin_state: String,

    /// Outbound pickup date, YYYY-MM-DD (defaults to today if unparseable)
    pub date: String,

    /// Heaviest load the truck can take, 1,000 to 80,000 lbs
    pub max_weight: u32,

    /// Truck type (e.g. "V")
    pub truck_type: String,

    /// Driver's home city (defaults to the origin)
    pub home_city: Option<String>,

    /// Driver's home state (defaults to the origin)
    pub home_state: Option<String>,

    /// Preferred outbound drop-off city
    pub destination_city: Option<String>,

    /// Preferred outbound drop-off state
    pub destination_state: Option<String>,

    /// Load-board account to search under
    pub home_base_id: Option<String>,
}

/// Backhaul search results, best pair first.
#[derive(Debug, Serialize)]
pub struct BackhaulSearchResponse {
    pub pairs: Vec<LoadPair>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
