//! Collaborators the planner depends on.
//!
//! The planner never talks to load boards or mapping services directly.
//! It is handed a [`LoadSource`] and a [`DistanceOracle`], which lets it be
//! tested with in-memory data and run against whichever backends the
//! service layer wires in.

use chrono::NaiveDate;

use crate::domain::{EquipmentType, Load, Place};

/// Error from a load source lookup.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadSourceError {
    /// The backing board could not be reached or answered with an error
    #[error("load source unavailable: {0}")]
    Unavailable(String),

    /// The lookup took longer than the planner allows
    #[error("load search from {origin} timed out")]
    Timeout { origin: Place },

    /// The query was rejected
    #[error("invalid load query: {0}")]
    InvalidQuery(String),
}

/// Search criteria for one location and date.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadQuery {
    /// Where the truck is
    pub origin: Place,

    /// Pickup date to search for
    pub date: NaiveDate,

    /// Heaviest load the truck can take (pounds)
    pub max_weight: u32,

    /// Acceptable equipment types
    pub equipment: Vec<EquipmentType>,

    /// Preferred drop-off; a hint the source may ignore
    pub destination: Option<Place>,

    /// Whether this is a return-leg search
    pub backhaul: bool,

    /// Load-board account the search runs under
    pub account_id: Option<String>,
}

impl LoadQuery {
    /// Create a query with no destination hint.
    pub fn new(
        origin: Place,
        date: NaiveDate,
        max_weight: u32,
        equipment: Vec<EquipmentType>,
    ) -> Self {
        Self {
            origin,
            date,
            max_weight,
            equipment,
            destination: None,
            backhaul: false,
            account_id: None,
        }
    }

    /// Set a preferred destination.
    pub fn toward(mut self, destination: Option<Place>) -> Self {
        self.destination = destination;
        self
    }

    /// Mark this as a return-leg search.
    pub fn as_backhaul(mut self) -> Self {
        self.backhaul = true;
        self
    }

    /// Run the search under a load-board account.
    pub fn with_account(mut self, account_id: Option<String>) -> Self {
        self.account_id = account_id;
        self
    }
}

/// Trait for providing candidate loads.
///
/// Implementations return loads already annotated with distance, rate,
/// deadhead distances, age, stops and ship date.
#[allow(async_fn_in_trait)]
pub trait LoadSource {
    /// Find loads picking up near `query.origin` on `query.date`.
    async fn search(&self, query: &LoadQuery) -> Result<Vec<Load>, LoadSourceError>;
}

/// Driving distance and time between two places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drive {
    pub miles: f64,
    pub hours: f64,
}

/// Trait for looking up driving distances.
///
/// Implementations apply their own timeout and never fail loudly: any
/// problem is reported as `None`.
#[allow(async_fn_in_trait)]
pub trait DistanceOracle {
    /// Driving distance from `from` to `to`, if it could be determined.
    async fn driving_distance(&self, from: &Place, to: &Place) -> Option<Drive>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_builders() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let query = LoadQuery::new(
            Place::new("Dallas", "TX"),
            date,
            45_000,
            vec![EquipmentType::Van],
        );
        assert_eq!(query.destination, None);
        assert!(!query.backhaul);

        let query = query
            .toward(Some(Place::new("Tulsa", "OK")))
            .as_backhaul()
            .with_account(Some("843982".into()));
        assert_eq!(query.destination, Some(Place::new("Tulsa", "OK")));
        assert!(query.backhaul);
        assert_eq!(query.account_id.as_deref(), Some("843982"));
    }

    #[test]
    fn error_display() {
        let err = LoadSourceError::Timeout {
            origin: Place::new("Dallas", "TX"),
        };
        assert_eq!(err.to_string(), "load search from Dallas, TX timed out");

        let err = LoadSourceError::Unavailable("503".into());
        assert_eq!(err.to_string(), "load source unavailable: 503");
    }
}
