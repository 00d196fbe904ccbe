//! Multi-stop routes.
//!
//! A `Route` is the stitched output of the trip planner: loads in the order
//! they are hauled, with deadhead moves filling every gap so the truck never
//! teleports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DomainError, Load, Place, Segment};

/// An ordered, contiguous sequence of segments.
///
/// # Invariants
///
/// - Consecutive segments connect (destination of one = origin of next)
/// - No segment is received before it ships
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Segment>", into = "Vec<Segment>")]
pub struct Route {
    segments: Vec<Segment>,
}

impl Route {
    /// Constructs a route, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns `Err` if consecutive segments don't meet at the same place,
    /// or if a segment's receive date precedes its ship date.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use load_planner::domain::{Deadhead, Place, Route, Segment};
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    /// let dallas = Place::new("Dallas", "TX");
    /// let tulsa = Place::new("Tulsa", "OK");
    ///
    /// let out = Deadhead::new(dallas.clone(), tulsa.clone(), 260.0, day);
    /// let back = Deadhead::new(tulsa, dallas, 260.0, out.receive_date);
    ///
    /// let route = Route::new(vec![Segment::Deadhead(out), Segment::Deadhead(back)]).unwrap();
    /// assert_eq!(route.len(), 2);
    /// assert!(route.is_round_trip());
    /// ```
    pub fn new(segments: Vec<Segment>) -> Result<Self, DomainError> {
        for window in segments.windows(2) {
            let prev_dest = window[0].destination();
            let next_origin = window[1].origin();
            if prev_dest != next_origin {
                return Err(DomainError::PlacesNotConnected(
                    prev_dest.clone(),
                    next_origin.clone(),
                ));
            }
        }

        for segment in &segments {
            if segment
                .receive_date()
                .is_some_and(|received| received < segment.ship_date())
            {
                return Err(DomainError::ReceivedBeforeShipped(segment.origin().clone()));
            }
        }

        Ok(Route { segments })
    }

    /// Returns all segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the route has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns all paid loads in order.
    pub fn loads(&self) -> impl Iterator<Item = &Load> {
        self.segments.iter().filter_map(|s| s.as_load())
    }

    /// Returns the number of paid loads.
    pub fn load_count(&self) -> usize {
        self.loads().count()
    }

    /// Returns the number of deadhead moves.
    pub fn deadhead_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_deadhead()).count()
    }

    /// Returns where the route starts.
    pub fn origin(&self) -> Option<&Place> {
        self.segments.first().map(|s| s.origin())
    }

    /// Returns where the route ends.
    pub fn destination(&self) -> Option<&Place> {
        self.segments.last().map(|s| s.destination())
    }

    /// Returns the first ship date.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.segments.first().map(|s| s.ship_date())
    }

    /// Returns the last receive date, if the final segment has one.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.segments.last().and_then(|s| s.receive_date())
    }

    /// Returns true if the route ends where it started.
    pub fn is_round_trip(&self) -> bool {
        match (self.origin(), self.destination()) {
            (Some(origin), Some(destination)) => origin == destination,
            _ => false,
        }
    }
}

impl TryFrom<Vec<Segment>> for Route {
    type Error = DomainError;

    fn try_from(segments: Vec<Segment>) -> Result<Self, Self::Error> {
        Route::new(segments)
    }
}

impl From<Route> for Vec<Segment> {
    fn from(route: Route) -> Self {
        route.segments
    }
}
