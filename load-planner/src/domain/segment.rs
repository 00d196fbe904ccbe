//! Route segments: paid loads and unpaid deadhead moves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DEADHEAD_CODE, Load, Place, add_days, travel_days};

/// An empty move between two places.
///
/// Deadheads earn nothing; they exist so that a route stays geographically
/// contiguous (e.g. home to the first pickup, or the last drop-off back home).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deadhead {
    /// Where the empty truck starts
    pub origin: Place,
    /// Where the empty truck ends up
    pub destination: Place,
    /// Driving distance in miles (0 when it could not be looked up)
    pub distance: f64,
    /// Day the move starts
    pub ship_date: NaiveDate,
    /// Day the move ends
    pub receive_date: NaiveDate,
}

impl Deadhead {
    /// Creates a deadhead starting on `ship_date`, arriving after the travel
    /// days its distance needs.
    ///
    /// Arrivals past the end of the calendar are pinned to `NaiveDate::MAX`.
    pub fn new(origin: Place, destination: Place, distance: f64, ship_date: NaiveDate) -> Self {
        Self {
            origin,
            destination,
            distance,
            ship_date,
            receive_date: add_days(ship_date, travel_days(distance)).unwrap_or(NaiveDate::MAX),
        }
    }
}

/// One move within a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// A revenue-bearing load
    Load(Load),
    /// An empty move
    Deadhead(Deadhead),
}

impl Segment {
    /// Returns the starting place of this segment.
    pub fn origin(&self) -> &Place {
        match self {
            Segment::Load(load) => &load.origin,
            Segment::Deadhead(deadhead) => &deadhead.origin,
        }
    }

    /// Returns the ending place of this segment.
    pub fn destination(&self) -> &Place {
        match self {
            Segment::Load(load) => &load.destination,
            Segment::Deadhead(deadhead) => &deadhead.destination,
        }
    }

    /// Returns the driven distance in miles.
    pub fn distance(&self) -> f64 {
        match self {
            Segment::Load(load) => load.distance,
            Segment::Deadhead(deadhead) => deadhead.distance,
        }
    }

    /// Returns the day the segment starts.
    pub fn ship_date(&self) -> NaiveDate {
        match self {
            Segment::Load(load) => load.ship_date,
            Segment::Deadhead(deadhead) => deadhead.ship_date,
        }
    }

    /// Returns the day the segment ends, if known.
    pub fn receive_date(&self) -> Option<NaiveDate> {
        match self {
            Segment::Load(load) => load.receive_date,
            Segment::Deadhead(deadhead) => Some(deadhead.receive_date),
        }
    }

    /// Revenue earned by this segment.
    ///
    /// Uses the revenue credited when the load was planned; falls back to the
    /// posted pay, then to the per-mile estimate. Deadheads earn nothing.
    pub fn revenue(&self) -> f64 {
        match self {
            Segment::Load(load) => match load.revenue {
                Some(revenue) if revenue != 0.0 => revenue,
                _ => load.booked_revenue(),
            },
            Segment::Deadhead(_) => 0.0,
        }
    }

    /// Equipment code for display; deadheads use a fixed sentinel.
    pub fn equipment_code(&self) -> Option<&'static str> {
        match self {
            Segment::Load(load) => load.equipment.map(|e| e.code()),
            Segment::Deadhead(_) => Some(DEADHEAD_CODE),
        }
    }

    /// Returns true if this is an empty move.
    pub fn is_deadhead(&self) -> bool {
        matches!(self, Segment::Deadhead(_))
    }

    /// Returns true if this is a paid load.
    pub fn is_load(&self) -> bool {
        matches!(self, Segment::Load(_))
    }

    /// Returns the load if this is a paid segment.
    pub fn as_load(&self) -> Option<&Load> {
        match self {
            Segment::Load(load) => Some(load),
            Segment::Deadhead(_) => None,
        }
    }

    /// Returns the deadhead if this is an empty move.
    pub fn as_deadhead(&self) -> Option<&Deadhead> {
        match self {
            Segment::Load(_) => None,
            Segment::Deadhead(deadhead) => Some(deadhead),
        }
    }
}
