//! Scoring functions for loads, trip legs and backhaul pairs.
//!
//! Three different scores are used and they are not interchangeable:
//!
//! - [`load_score`] ranks raw load-board results on a bounded `[0, 1]` scale.
//! - [`plan_score`] ranks the next leg of a multi-load trip in dollars,
//!   pulling the truck back toward home as the trip gets longer.
//! - [`pair_score`] ranks outbound/return pairs by revenue per mile with a
//!   bonus for revenue per day.

use chrono::NaiveDate;
use tracing::trace;

use crate::domain::{Load, Place, pair_deadhead};

use super::source::DistanceOracle;

const RATE_WEIGHT: f64 = 0.45;
const DISTANCE_WEIGHT: f64 = 0.25;
const AGE_WEIGHT: f64 = 0.15;
const STOPS_WEIGHT: f64 = 0.05;
const DEADHEAD_WEIGHT: f64 = 0.10;

/// Rate per mile at which the rate factor saturates.
const RATE_CEILING: f64 = 5.0;

/// Trip length the distance factor prefers.
const IDEAL_DISTANCE: f64 = 500.0;

/// Posting age at which the age factor reaches zero.
const MAX_AGE_HOURS: f64 = 48.0;

/// Stop count at which the stops factor reaches zero.
const MAX_STOPS: f64 = 3.0;

/// Deadhead at which the deadhead factor reaches zero.
const MAX_DEADHEAD: f64 = 300.0;

/// Miles per travel day assumed when estimating a pair's duration.
const PAIR_MILES_PER_DAY: f64 = 550.0;

/// Weight of revenue-per-day relative to revenue-per-mile in pair scores.
const DAY_REVENUE_WEIGHT: f64 = 0.004;

/// Score a load-board result in `[0, 1]`.
///
/// Weighted sum of five factors: rate (45%), distance (25%), posting age
/// (15%), stops (5%) and deadhead (10%). Loads without a usable rate score
/// exactly 0 so they always sort last. Factors with no data contribute
/// nothing.
pub fn load_score(load: &Load) -> f64 {
    let rate = load.rate_per_mile_est;
    if rate.is_nan() || rate <= 0.0 {
        return 0.0;
    }

    let rate_part = rate_factor(rate) * RATE_WEIGHT;
    let distance_part = if load.distance > 0.0 {
        distance_factor(load.distance) * DISTANCE_WEIGHT
    } else {
        0.0
    };
    let age_part = load.age_hours.map_or(0.0, |age| age_factor(age) * AGE_WEIGHT);
    let stops_part = load
        .stops
        .map_or(0.0, |stops| stops_factor(stops) * STOPS_WEIGHT);
    let deadhead_part = deadhead_factor(load.deadhead_miles()) * DEADHEAD_WEIGHT;

    let score = rate_part + distance_part + age_part + stops_part + deadhead_part;

    trace!(
        load = %load.id,
        rate_part,
        distance_part,
        age_part,
        stops_part,
        deadhead_part,
        score,
        "Load score breakdown"
    );

    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 1.0)
}

/// Rate factor: linear up to $5/mile, then flat.
fn rate_factor(rate: f64) -> f64 {
    (rate / RATE_CEILING).min(1.0)
}

/// Distance factor: peaks at 500 miles, reaching zero at 0 and 1500.
fn distance_factor(distance: f64) -> f64 {
    (1.0 - (distance - IDEAL_DISTANCE).abs() / 1000.0).clamp(0.0, 1.0)
}

/// Age factor: fresh postings score 1, 48h and older score 0.
fn age_factor(age_hours: f64) -> f64 {
    1.0 - (age_hours / MAX_AGE_HOURS).min(1.0)
}

/// Stops factor: no stops scores 1, three or more score 0.
fn stops_factor(stops: u32) -> f64 {
    1.0 - (f64::from(stops) / MAX_STOPS).min(1.0)
}

/// Deadhead factor: no deadhead scores 1, 300 miles or more score 0.
fn deadhead_factor(deadhead: f64) -> f64 {
    1.0 - (deadhead / MAX_DEADHEAD).min(1.0)
}

/// Multiplier on the distance-from-home penalty after `days` on the road.
///
/// # Examples
///
/// ```
/// use load_planner::planner::time_penalty;
///
/// assert_eq!(time_penalty(0), 1.0);
/// assert_eq!(time_penalty(4), 1.2);
/// assert_eq!(time_penalty(6), 1.5);
/// assert_eq!(time_penalty(10), 2.0);
/// ```
pub fn time_penalty(days: i64) -> f64 {
    match days {
        ..=3 => 1.0,
        4..=5 => 1.2,
        6..=7 => 1.5,
        _ => 2.0,
    }
}

/// Score a candidate leg of a multi-load trip.
///
/// Revenue (`rate * distance`) minus one dollar per hundred miles between the
/// load's drop-off and home, scaled by [`time_penalty`] for the days elapsed
/// since the trip started. Without both dates the multiplier is 1. If the
/// distance home can't be determined it counts as zero.
pub async fn plan_score<D: DistanceOracle>(
    load: &Load,
    home: &Place,
    current_date: Option<NaiveDate>,
    trip_start: Option<NaiveDate>,
    oracle: &D,
) -> f64 {
    let revenue = load.estimated_revenue();

    let distance_to_home = oracle
        .driving_distance(&load.destination, home)
        .await
        .map_or(0.0, |drive| drive.miles);

    let multiplier = match (current_date, trip_start) {
        (Some(current), Some(start)) => time_penalty((current - start).num_days()),
        _ => 1.0,
    };

    let penalty = (distance_to_home / 100.0) * multiplier;
    let score = revenue - penalty;

    trace!(
        load = %load.id,
        revenue,
        distance_to_home,
        multiplier,
        penalty,
        score,
        "Plan score breakdown"
    );

    score
}

/// Score an outbound/return pair.
///
/// Revenue per mile driven (deadhead included) plus 0.004 times revenue per
/// estimated day. The day estimate is two days plus the cheaper of two ways
/// of bucketing the driving into 550-mile days.
pub fn pair_score(outbound: &Load, return_load: &Load) -> f64 {
    let deadhead = pair_deadhead(outbound, return_load);
    let total_distance = deadhead + outbound.distance + return_load.distance;
    if total_distance <= 0.0 {
        return 0.0;
    }

    let total_revenue = outbound.estimated_revenue() + return_load.estimated_revenue();
    let revenue_per_mile = total_revenue / total_distance;

    let days = 2.0 + estimated_pair_days(outbound, return_load);
    let revenue_per_day = total_revenue / days;

    revenue_per_mile + DAY_REVENUE_WEIGHT * revenue_per_day
}

/// Driving days for a pair, not counting the two fixed handling days.
fn estimated_pair_days(outbound: &Load, return_load: &Load) -> f64 {
    let days = |miles: f64| (miles / PAIR_MILES_PER_DAY).floor();

    // Return pickup deadhead counted with the outbound leg...
    let first = days(outbound.distance + outbound.origin_distance + return_load.origin_distance)
        + days(return_load.distance + return_load.destination_distance);
    // ...or with the return leg.
    let second = days(outbound.distance + outbound.origin_distance)
        + days(
            return_load.distance + return_load.destination_distance + return_load.origin_distance,
        );

    first.min(second)
}
