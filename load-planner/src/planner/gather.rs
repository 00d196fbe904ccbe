//! Candidate gathering: one bounded load-source lookup, ranked.

use tokio::time::timeout;
use tracing::{debug, warn};

use crate::domain::{Load, add_days};

use super::config::PlannerConfig;
use super::score::load_score;
use super::source::{LoadQuery, LoadSource};

/// Fetch and rank candidate loads for one place and date.
///
/// Lookup failures and timeouts are logged and treated as "no loads", as is
/// a date whose ship window runs off the end of the calendar.
/// Loads shipping outside `[date, date + ship_window_days]` are dropped.
/// Each remaining load gets its [`load_score`] and the list is sorted best
/// first; loads with equal scores keep the order the source returned them in.
pub async fn gather_candidates<S: LoadSource>(
    source: &S,
    query: &LoadQuery,
    config: &PlannerConfig,
) -> Vec<Load> {
    let Some(last_ship) = add_days(query.date, config.ship_window_days) else {
        warn!(origin = %query.origin, date = %query.date, "Ship window out of range");
        return Vec::new();
    };

    let loads = match timeout(config.lookup_timeout(), source.search(query)).await {
        Ok(Ok(loads)) => loads,
        Ok(Err(e)) => {
            warn!(origin = %query.origin, date = %query.date, error = %e, "Load search failed");
            return Vec::new();
        }
        Err(_) => {
            warn!(
                origin = %query.origin,
                date = %query.date,
                timeout_secs = config.lookup_timeout_secs,
                "Load search timed out"
            );
            return Vec::new();
        }
    };

    let returned = loads.len();

    let mut candidates: Vec<_> = loads
        .into_iter()
        .filter(|load| load.ship_date >= query.date && load.ship_date <= last_ship)
        .map(|mut load| {
            load.score = load_score(&load);
            load
        })
        .collect();

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        origin = %query.origin,
        date = %query.date,
        backhaul = query.backhaul,
        returned,
        kept = candidates.len(),
        "Gathered candidates"
    );

    candidates
}
