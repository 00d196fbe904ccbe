//! Single-leg selection.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Load, Place};

use super::config::PlannerConfig;
use super::score::plan_score;
use super::source::DistanceOracle;

/// Pick the best next leg from `loads`.
///
/// When `destination` is given, only loads dropping off exactly there are
/// considered. Survivors are ranked by [`plan_score`]; the best
/// `config.selector_pool` of them are compared and the highest scoring one
/// is returned, the earlier one winning a tie. Returns `None` when nothing
/// survives the filter.
///
/// The returned load carries its plan score in `score`.
pub async fn select_best<D: DistanceOracle>(
    loads: Vec<Load>,
    home: &Place,
    destination: Option<&Place>,
    current_date: Option<NaiveDate>,
    trip_start: Option<NaiveDate>,
    oracle: &D,
    config: &PlannerConfig,
) -> Option<Load> {
    let mut candidates: Vec<Load> = match destination {
        Some(dest) => loads.into_iter().filter(|l| &l.destination == dest).collect(),
        None => loads,
    };

    if candidates.is_empty() {
        return None;
    }

    for load in &mut candidates {
        load.score = plan_score(load, home, current_date, trip_start, oracle).await;
    }
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(config.selector_pool.max(1));

    debug!(
        considered = candidates.len(),
        best = candidates.first().map(|l| l.score),
        "Selecting from top candidates"
    );

    let mut best: Option<Load> = None;
    for load in candidates {
        match &best {
            Some(current) if load.score <= current.score => {}
            _ => best = Some(load),
        }
    }
    best
}
