//! Google Routes driving-distance client.
//!
//! This module provides an HTTP client for the Google Maps Routes API,
//! used as the production [`DistanceOracle`](crate::planner::DistanceOracle).
//!
//! Key characteristics of the Routes API:
//! - Places are sent as free-text addresses (`"Dallas, TX, USA"`)
//! - A field mask header limits the response to the fields we read
//! - Distances come back in meters and durations as `"1234s"` strings,
//!   whatever `units` is requested

mod client;
mod error;
mod types;

pub use client::{RoutesClient, RoutesConfig};
pub use error::DistanceError;
pub use types::{ComputeRoutesRequest, ComputeRoutesResponse, RouteSummary, Waypoint};
