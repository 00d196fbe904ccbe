//! Multi-load trip planning.
//!
//! Starting from home, the planner repeatedly asks the load source what is
//! available where the truck currently is, picks the leg with the best
//! [`plan_score`], and moves the truck to its drop-off. It stops after
//! `max_loads` legs or as soon as a place has nothing to offer, then stitches
//! the legs into a route that ends back home.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::{DomainError, EquipmentType, Load, Place, Route, Segment, add_days, travel_days};

use super::config::PlannerConfig;
use super::gather::gather_candidates;
use super::metrics::{RouteMetrics, route_metrics};
use super::score::plan_score;
use super::source::{DistanceOracle, LoadQuery, LoadSource};
use super::stitch::stitch;

/// Error from trip planning.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// Not a single leg could be found
    #[error("no loads available from {origin} on {date}")]
    NoRouteFound { origin: Place, date: NaiveDate },

    /// The request can't be planned
    #[error("invalid trip request: {0}")]
    InvalidRequest(String),

    /// The stitched route broke an invariant
    #[error("route could not be built: {0}")]
    Route(#[from] DomainError),
}

/// Request for a multi-load trip.
#[derive(Debug, Clone)]
pub struct TripRequest {
    /// Where the truck starts and must end
    pub home: Place,

    /// First pickup date
    pub start_date: NaiveDate,

    /// Heaviest load the truck can take (pounds)
    pub max_weight: u32,

    /// Acceptable equipment types
    pub equipment: Vec<EquipmentType>,

    /// Most legs to chain together
    pub max_loads: usize,

    /// Load-board account to search under
    pub home_base_id: Option<String>,
}

impl TripRequest {
    /// Create a request with no load-board account.
    pub fn new(
        home: Place,
        start_date: NaiveDate,
        max_weight: u32,
        equipment: Vec<EquipmentType>,
        max_loads: usize,
    ) -> Self {
        Self {
            home,
            start_date,
            max_weight,
            equipment,
            max_loads,
            home_base_id: None,
        }
    }

    /// Search under a load-board account.
    pub fn with_home_base(mut self, id: impl Into<String>) -> Self {
        self.home_base_id = Some(id.into());
        self
    }

    /// Validate the request.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.max_loads == 0 {
            return Err(PlanError::InvalidRequest(
                "max_loads must be at least 1".to_string(),
            ));
        }
        if self.equipment.is_empty() {
            return Err(PlanError::InvalidRequest(
                "at least one equipment type is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Why the planner stopped adding legs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The requested number of legs was reached
    MaxLoadsReached,

    /// Nothing was available at this place and date
    NoCandidates { place: Place, date: NaiveDate },
}

/// A planned trip.
#[derive(Debug, Clone)]
pub struct PlannedTrip {
    /// Stitched route from home back to home
    pub route: Route,

    /// Figures for the route
    pub metrics: RouteMetrics,

    /// Why planning stopped
    pub stop_reason: StopReason,
}

/// Trip planner over a load source and a distance oracle.
pub struct TripPlanner<'a, S, D> {
    source: &'a S,
    oracle: &'a D,
    config: &'a PlannerConfig,
}

impl<'a, S: LoadSource, D: DistanceOracle> TripPlanner<'a, S, D> {
    /// Create a new planner.
    pub fn new(source: &'a S, oracle: &'a D, config: &'a PlannerConfig) -> Self {
        Self {
            source,
            oracle,
            config,
        }
    }

    /// Plan a trip.
    ///
    /// Lookups that fail end the search early but keep the legs already
    /// found. Only a trip without a single leg is an error.
    pub async fn plan(&self, request: &TripRequest) -> Result<PlannedTrip, PlanError> {
        request.validate()?;

        let mut legs: Vec<Load> = Vec::new();
        let mut location = request.home.clone();
        let mut date = request.start_date;

        let stop_reason = loop {
            if legs.len() >= request.max_loads {
                break StopReason::MaxLoadsReached;
            }

            let query = LoadQuery::new(
                location.clone(),
                date,
                request.max_weight,
                request.equipment.clone(),
            )
            .with_account(request.home_base_id.clone());

            let candidates = gather_candidates(self.source, &query, self.config).await;
            let Some(leg) = self.best_leg(candidates, request, date).await else {
                debug!(%location, %date, legs = legs.len(), "No candidates; ending trip");
                break StopReason::NoCandidates {
                    place: location,
                    date,
                };
            };

            debug!(
                leg = legs.len() + 1,
                load = %leg.id,
                from = %leg.origin,
                to = %leg.destination,
                score = leg.score,
                "Leg found"
            );

            location = leg.destination.clone();
            date = leg.receive_date.unwrap_or(date);
            legs.push(leg);
        };

        if legs.is_empty() {
            return Err(PlanError::NoRouteFound {
                origin: request.home.clone(),
                date: request.start_date,
            });
        }

        let segments = legs.into_iter().map(Segment::Load).collect();
        let route = stitch(segments, &request.home, request.start_date, self.oracle).await?;
        let metrics = route_metrics(&route);

        info!(
            home = %request.home,
            loads = metrics.total_loads,
            segments = route.len(),
            revenue = metrics.total_revenue,
            miles = metrics.total_miles,
            deadhead = metrics.total_deadhead,
            rate_per_mile = metrics.rate_per_mile,
            days = metrics.total_days,
            stop_reason = ?stop_reason,
            "Trip planned"
        );

        Ok(PlannedTrip {
            route,
            metrics,
            stop_reason,
        })
    }

    /// Rank candidates by plan score and take the single best, with its
    /// revenue and delivery date filled in. Loads whose delivery would fall
    /// past the end of the calendar are passed over.
    async fn best_leg(
        &self,
        candidates: Vec<Load>,
        request: &TripRequest,
        current_date: NaiveDate,
    ) -> Option<Load> {
        let mut scored = Vec::with_capacity(candidates.len());
        for mut load in candidates {
            load.score = plan_score(
                &load,
                &request.home,
                Some(current_date),
                Some(request.start_date),
                self.oracle,
            )
            .await;
            scored.push(load);
        }
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        scored.into_iter().find_map(|mut leg| {
            let Some(received) = add_days(leg.ship_date, travel_days(leg.distance)) else {
                warn!(
                    load = %leg.id,
                    ship_date = %leg.ship_date,
                    distance = leg.distance,
                    "Delivery date out of range; skipping load"
                );
                return None;
            };
            leg.revenue = Some(leg.booked_revenue());
            leg.receive_date = Some(received);
            Some(leg)
        })
    }
}

#[cfg(test)]
#[path = "trip_tests.rs"]
mod tests;
