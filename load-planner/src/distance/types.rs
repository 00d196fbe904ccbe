//! Routes API request and response DTOs.
//!
//! Only the fields the field mask asks for are modelled. Everything in the
//! response is optional because the API omits empty fields.

use serde::{Deserialize, Serialize};

use super::error::DistanceError;

/// Meters in a statute mile.
const METERS_PER_MILE: f64 = 1609.34;

/// Body of a `computeRoutes` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesRequest {
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub travel_mode: &'static str,
    pub routing_preference: &'static str,
    pub compute_alternative_routes: bool,
    pub language_code: &'static str,
    pub units: &'static str,
}

impl ComputeRoutesRequest {
    /// A traffic-aware driving request between two addresses.
    pub fn driving(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: Waypoint {
                address: origin.into(),
            },
            destination: Waypoint {
                address: destination.into(),
            },
            travel_mode: "DRIVE",
            routing_preference: "TRAFFIC_AWARE",
            compute_alternative_routes: false,
            language_code: "en-US",
            units: "IMPERIAL",
        }
    }
}

/// A location given as a free-text address.
#[derive(Debug, Clone, Serialize)]
pub struct Waypoint {
    pub address: String,
}

/// Response from `computeRoutes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComputeRoutesResponse {
    /// Candidate routes, best first. Absent when nothing was found.
    #[serde(default)]
    pub routes: Vec<RouteSummary>,
}

/// The masked fields of one route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    /// Route length in meters.
    pub distance_meters: Option<u64>,

    /// Travel time as seconds with an `s` suffix, e.g. `"16240s"`.
    pub duration: Option<String>,
}

impl RouteSummary {
    /// Route length in miles.
    pub fn miles(&self) -> Result<f64, DistanceError> {
        self.distance_meters
            .map(|meters| meters as f64 / METERS_PER_MILE)
            .ok_or_else(|| DistanceError::MalformedRoute("missing distanceMeters".to_string()))
    }

    /// Travel time in hours.
    pub fn hours(&self) -> Result<f64, DistanceError> {
        let duration = self
            .duration
            .as_deref()
            .ok_or_else(|| DistanceError::MalformedRoute("missing duration".to_string()))?;
        let seconds: f64 = duration
            .trim_end_matches('s')
            .parse()
            .map_err(|_| DistanceError::MalformedRoute(format!("bad duration {duration:?}")))?;
        Ok(seconds / 3600.0)
    }
}
