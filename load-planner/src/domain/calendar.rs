//! Calendar arithmetic for chained loads.
//!
//! Trips are planned at day granularity: a truck covers roughly 500 miles a
//! day, every move takes at least one day, and load boards report pickup
//! dates either as ISO dates or as US-style `M/D/YY`.

use chrono::{Local, NaiveDate, TimeDelta};
use tracing::warn;

/// Miles a truck is assumed to cover per day of travel.
pub const MILES_PER_DAY: f64 = 500.0;

/// Days needed to drive `miles`.
///
/// Always at least one day, including for zero or unknown distances, so that
/// chained segments never land on the same day they started.
///
/// # Examples
///
/// ```
/// use load_planner::domain::travel_days;
///
/// assert_eq!(travel_days(0.0), 1);
/// assert_eq!(travel_days(500.0), 1);
/// assert_eq!(travel_days(501.0), 2);
/// assert_eq!(travel_days(1400.0), 3);
/// ```
pub fn travel_days(miles: f64) -> i64 {
    if miles.is_nan() || miles <= 0.0 {
        return 1;
    }
    ((miles / MILES_PER_DAY).ceil() as i64).max(1)
}

/// The date `days` after `date`, or `None` if that falls outside the
/// calendar `NaiveDate` can represent.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a load-board pickup date, either `YYYY-MM-DD` or `M/D/YY`.
pub fn parse_board_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.contains('/') {
        NaiveDate::parse_from_str(s, "%m/%d/%y").ok()
    } else {
        parse_iso_date(s)
    }
}

/// Parse a caller-supplied date, falling back to today when malformed.
///
/// Planner inputs never fail on a bad date; the fallback is logged.
pub fn parse_date_or_today(s: &str) -> NaiveDate {
    parse_iso_date(s).unwrap_or_else(|| {
        let today = Local::now().date_naive();
        warn!(input = %s, fallback = %today, "Unparseable date, using today");
        today
    })
}
