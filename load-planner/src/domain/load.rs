//! Freight loads offered on a load board.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EquipmentType, Place};

/// A single freight-hauling job.
///
/// Loads arrive from a load source already annotated with trip distance and
/// the deadhead distances to reach the pickup and to leave the drop-off.
/// Numeric fields the board leaves blank are reported as zero; fields where
/// zero is a meaningful value (`age_hours`, `stops`, `weight`) are optional.
///
/// Within the planner a load is only touched to attach its ranking `score`,
/// and, once it is chosen for a route, its `revenue` and `receive_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Board-assigned identifier
    pub id: String,

    /// Pickup location
    pub origin: Place,

    /// Drop-off location
    pub destination: Place,

    /// Pickup date
    pub ship_date: NaiveDate,

    /// Delivery date, computed from the distance if the board has none
    pub receive_date: Option<NaiveDate>,

    /// Loaded miles
    pub distance: f64,

    /// Estimated dollars per loaded mile (0 when unknown)
    pub rate_per_mile_est: f64,

    /// Posted payment in dollars (0 means "rate on request")
    pub pay_rate: f64,

    /// Weight in pounds
    pub weight: Option<f64>,

    /// Hours since the load was posted
    pub age_hours: Option<f64>,

    /// Number of intermediate stops
    pub stops: Option<u32>,

    /// Deadhead miles from the search point to the pickup
    pub origin_distance: f64,

    /// Deadhead miles from the drop-off to the nearest recognised point
    pub destination_distance: f64,

    /// Required equipment, when the board code is recognised
    pub equipment: Option<EquipmentType>,

    /// Ranking score attached by whichever scorer last ranked this load
    pub score: f64,

    /// Revenue credited to this load once it is part of a route
    pub revenue: Option<f64>,
}

impl Load {
    /// Creates a load with all numeric fields zeroed and optional fields unset.
    pub fn new(
        id: impl Into<String>,
        origin: Place,
        destination: Place,
        ship_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            origin,
            destination,
            ship_date,
            receive_date: None,
            distance: 0.0,
            rate_per_mile_est: 0.0,
            pay_rate: 0.0,
            weight: None,
            age_hours: None,
            stops: None,
            origin_distance: 0.0,
            destination_distance: 0.0,
            equipment: None,
            score: 0.0,
            revenue: None,
        }
    }

    /// Total deadhead the board reports around this load.
    pub fn deadhead_miles(&self) -> f64 {
        self.origin_distance + self.destination_distance
    }

    /// Revenue implied by the per-mile estimate.
    pub fn estimated_revenue(&self) -> f64 {
        self.rate_per_mile_est * self.distance
    }

    /// Revenue the driver would book: the posted pay if there is one,
    /// otherwise the per-mile estimate over the loaded distance.
    pub fn booked_revenue(&self) -> f64 {
        if self.pay_rate > 0.0 {
            self.pay_rate
        } else {
            self.estimated_revenue()
        }
    }

    /// Whether the load has both a distance and a usable rate.
    pub fn is_priced(&self) -> bool {
        self.distance > 0.0 && self.rate_per_mile_est > 0.0
    }
}
