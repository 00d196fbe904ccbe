//! Outbound/return load pairs for backhaul planning.

use serde::{Deserialize, Serialize};

use super::Load;

/// An outbound load and the return load that brings the truck back.
///
/// Totals count both loaded legs plus three deadhead stretches: reaching the
/// outbound pickup, reaching the return pickup, and leaving the return
/// drop-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadPair {
    pub outbound: Load,
    #[serde(rename = "return")]
    pub return_load: Load,
    pub combined_score: f64,
    pub total_revenue: f64,
    pub total_miles: f64,
    pub deadhead_miles: f64,
    pub average_rate: f64,
    /// Whether the return load drops off at the driver's home base
    pub returns_home: bool,
}

impl LoadPair {
    /// Builds a pair, deriving its totals from the two loads.
    pub fn new(outbound: Load, return_load: Load, combined_score: f64, returns_home: bool) -> Self {
        let deadhead_miles = pair_deadhead(&outbound, &return_load);
        let total_revenue = outbound.estimated_revenue() + return_load.estimated_revenue();
        let total_miles = outbound.distance + return_load.distance + deadhead_miles;
        let average_rate = if total_miles > 0.0 {
            total_revenue / total_miles
        } else {
            0.0
        };

        Self {
            outbound,
            return_load,
            combined_score,
            total_revenue,
            total_miles,
            deadhead_miles,
            average_rate,
            returns_home,
        }
    }
}

/// Deadhead miles driven across an outbound/return pair.
pub fn pair_deadhead(outbound: &Load, return_load: &Load) -> f64 {
    outbound.origin_distance + return_load.origin_distance + return_load.destination_distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Place;
    use chrono::NaiveDate;

    fn load(from: (&str, &str), to: (&str, &str), distance: f64, rate: f64) -> Load {
        let mut load = Load::new(
            "L",
            Place::new(from.0, from.1),
            Place::new(to.0, to.1),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        );
        load.distance = distance;
        load.rate_per_mile_est = rate;
        load
    }

    #[test]
    fn totals() {
        let mut outbound = load(("Dallas", "TX"), ("Memphis", "TN"), 450.0, 2.0);
        outbound.origin_distance = 20.0;
        outbound.destination_distance = 99.0; // not counted
        let mut ret = load(("Memphis", "TN"), ("Fort Worth", "TX"), 480.0, 2.5);
        ret.origin_distance = 10.0;
        ret.destination_distance = 30.0;

        let pair = LoadPair::new(outbound, ret, 3.2, false);

        assert_eq!(pair.deadhead_miles, 60.0);
        assert_eq!(pair.total_revenue, 900.0 + 1200.0);
        assert_eq!(pair.total_miles, 990.0);
        assert!((pair.average_rate - 2100.0 / 990.0).abs() < 1e-9);
    }

    #[test]
    fn revenue_ignores_posted_pay() {
        let mut outbound = load(("Dallas", "TX"), ("Memphis", "TN"), 100.0, 2.0);
        outbound.pay_rate = 5000.0;
        let ret = load(("Memphis", "TN"), ("Dallas", "TX"), 100.0, 2.0);

        let pair = LoadPair::new(outbound, ret, 0.0, true);
        assert_eq!(pair.total_revenue, 400.0);
    }

    #[test]
    fn serializes_return_key() {
        let pair = LoadPair::new(
            load(("Dallas", "TX"), ("Memphis", "TN"), 100.0, 2.0),
            load(("Memphis", "TN"), ("Dallas", "TX"), 100.0, 2.0),
            1.0,
            true,
        );
        let json = serde_json::to_value(&pair).unwrap();
        assert!(json.get("return").is_some());
        assert!(json.get("return_load").is_none());
    }
}
