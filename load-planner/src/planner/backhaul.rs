//! Backhaul pairing.
//!
//! For the best outbound loads from an origin, look for return loads from
//! each drop-off heading back, and rank the resulting round trips by
//! [`pair_score`].
//!
//! Return searches are independent of one another, so they run concurrently
//! up to `backhaul_concurrency` at a time. Results are put back into outbound
//! order before the final sort, so the output doesn't depend on which search
//! finished first.

use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::domain::{EquipmentType, Load, LoadPair, Place, add_days};

use super::config::PlannerConfig;
use super::gather::gather_candidates;
use super::score::pair_score;
use super::source::{LoadQuery, LoadSource};

/// Miles per day assumed when estimating when an outbound load frees the truck.
const OUTBOUND_MILES_PER_DAY: f64 = 550.0;

/// Request for backhaul pairs.
#[derive(Debug, Clone)]
pub struct BackhaulRequest {
    /// Where the outbound load picks up
    pub origin: Place,

    /// Outbound pickup date
    pub date: NaiveDate,

    /// Heaviest load the truck can take (pounds)
    pub max_weight: u32,

    /// Truck type
    pub equipment: EquipmentType,

    /// Driver's home base; the origin when unset
    pub home: Option<Place>,

    /// Preferred outbound drop-off
    pub destination: Option<Place>,

    /// Load-board account to search under
    pub home_base_id: Option<String>,
}

impl BackhaulRequest {
    /// Create a request based at `origin`.
    pub fn new(origin: Place, date: NaiveDate, max_weight: u32, equipment: EquipmentType) -> Self {
        Self {
            origin,
            date,
            max_weight,
            equipment,
            home: None,
            destination: None,
            home_base_id: None,
        }
    }

    /// Set the driver's home base.
    pub fn with_home(mut self, home: Place) -> Self {
        self.home = Some(home);
        self
    }

    /// Prefer outbound loads heading to `destination`.
    pub fn toward(mut self, destination: Place) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Search under a load-board account.
    pub fn with_home_base(mut self, id: impl Into<String>) -> Self {
        self.home_base_id = Some(id.into());
        self
    }

    /// The driver's home base.
    pub fn home(&self) -> &Place {
        self.home.as_ref().unwrap_or(&self.origin)
    }
}

/// Date to search for a return load after hauling `outbound`.
///
/// One day plus a day for every full 550 miles of loaded and pickup-deadhead
/// driving, counted from the requested outbound date. `None` when that
/// lands past the end of the calendar.
pub fn return_date(outbound: &Load, outbound_date: NaiveDate) -> Option<NaiveDate> {
    let miles = outbound.distance + outbound.origin_distance;
    let days = ((miles / OUTBOUND_MILES_PER_DAY).floor() as i64).saturating_add(1);
    add_days(outbound_date, days)
}

/// Backhaul pairer over a load source.
pub struct BackhaulPairer<'a, S> {
    source: &'a S,
    config: &'a PlannerConfig,
}

impl<'a, S: LoadSource> BackhaulPairer<'a, S> {
    /// Create a new pairer.
    pub fn new(source: &'a S, config: &'a PlannerConfig) -> Self {
        Self { source, config }
    }

    /// Find outbound/return pairs, best first.
    ///
    /// Never fails: lookups that fail contribute no pairs.
    pub async fn pair(&self, request: &BackhaulRequest) -> Vec<LoadPair> {
        let query = LoadQuery::new(
            request.origin.clone(),
            request.date,
            request.max_weight,
            vec![request.equipment],
        )
        .toward(request.destination.clone())
        .with_account(request.home_base_id.clone());

        let mut outbound = gather_candidates(self.source, &query, self.config).await;
        outbound.truncate(self.config.outbound_limit);
        outbound.retain(Load::is_priced);

        let searched = outbound.len();

        let mut per_outbound: Vec<(usize, Vec<LoadPair>)> =
            stream::iter(outbound.into_iter().enumerate())
                .map(move |(index, load)| async move {
                    (index, self.pairs_for(load, request).await)
                })
                .buffer_unordered(self.config.backhaul_concurrency.max(1))
                .collect()
                .await;
        per_outbound.sort_by_key(|(index, _)| *index);

        let mut pairs: Vec<LoadPair> = per_outbound
            .into_iter()
            .flat_map(|(_, pairs)| pairs)
            .collect();
        pairs.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));

        info!(
            origin = %request.origin,
            date = %request.date,
            outbound = searched,
            pairs = pairs.len(),
            "Backhaul search complete"
        );

        pairs
    }

    /// Best return pairings for one outbound load.
    async fn pairs_for(&self, outbound: Load, request: &BackhaulRequest) -> Vec<LoadPair> {
        let Some(date) = return_date(&outbound, request.date) else {
            warn!(
                outbound = %outbound.id,
                distance = outbound.distance,
                "Return date out of range"
            );
            return Vec::new();
        };

        let query = LoadQuery::new(
            outbound.destination.clone(),
            date,
            request.max_weight,
            vec![request.equipment],
        )
        .toward(Some(request.origin.clone()))
        .as_backhaul()
        .with_account(request.home_base_id.clone());

        let returns = gather_candidates(self.source, &query, self.config).await;
        let home = request.home();

        let mut pairs: Vec<LoadPair> = returns
            .into_iter()
            .filter(Load::is_priced)
            .map(|ret| {
                let score = pair_score(&outbound, &ret);
                let returns_home = &ret.destination == home;
                LoadPair::new(outbound.clone(), ret, score, returns_home)
            })
            .collect();

        pairs.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));
        pairs.truncate(self.config.pairs_per_outbound);

        debug!(
            outbound = %outbound.id,
            to = %outbound.destination,
            return_date = %query.date,
            pairs = pairs.len(),
            "Paired return loads"
        );

        pairs
    }
}
