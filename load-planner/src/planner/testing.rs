//! In-memory collaborators for planner tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use chrono::NaiveDate;

use crate::domain::{Load, Place};

use super::source::{DistanceOracle, Drive, LoadQuery, LoadSource, LoadSourceError};

/// Build a priced load between two places.
pub fn load_at(
    id: &str,
    from: (&str, &str),
    to: (&str, &str),
    ship: NaiveDate,
    distance: f64,
    rate: f64,
) -> Load {
    let mut load = Load::new(id, Place::new(from.0, from.1), Place::new(to.0, to.1), ship);
    load.distance = distance;
    load.rate_per_mile_est = rate;
    load
}

/// Load source answering from a fixed table keyed by place and date.
pub struct MockBoard {
    loads: HashMap<(Place, NaiveDate), Vec<Load>>,
    failures: HashSet<(Place, NaiveDate)>,
    delay: Option<Duration>,
    queries: Mutex<Vec<LoadQuery>>,
}

impl MockBoard {
    pub fn new() -> Self {
        Self {
            loads: HashMap::new(),
            failures: HashSet::new(),
            delay: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn add(&mut self, origin: &Place, date: NaiveDate, loads: Vec<Load>) {
        self.loads.insert((origin.clone(), date), loads);
    }

    pub fn fail_at(&mut self, origin: &Place, date: NaiveDate) {
        self.failures.insert((origin.clone(), date));
    }

    pub fn delay(&mut self, delay: Duration) {
        self.delay = Some(delay);
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<LoadQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl LoadSource for MockBoard {
    async fn search(&self, query: &LoadQuery) -> Result<Vec<Load>, LoadSourceError> {
        self.queries.lock().unwrap().push(query.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let key = (query.origin.clone(), query.date);
        if self.failures.contains(&key) {
            return Err(LoadSourceError::Unavailable("mock failure".into()));
        }
        Ok(self.loads.get(&key).cloned().unwrap_or_default())
    }
}

/// Distance oracle with a fixed table; unknown pairs fail.
pub struct MockOracle {
    miles: HashMap<(Place, Place), f64>,
    calls: Mutex<usize>,
}

impl MockOracle {
    pub fn new() -> Self {
        Self {
            miles: HashMap::new(),
            calls: Mutex::new(0),
        }
    }

    /// Record a distance in both directions.
    pub fn add(&mut self, a: &Place, b: &Place, miles: f64) {
        self.miles.insert((a.clone(), b.clone()), miles);
        self.miles.insert((b.clone(), a.clone()), miles);
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl DistanceOracle for MockOracle {
    async fn driving_distance(&self, from: &Place, to: &Place) -> Option<Drive> {
        *self.calls.lock().unwrap() += 1;
        self.miles
            .get(&(from.clone(), to.clone()))
            .map(|&miles| Drive {
                miles,
                hours: miles / 55.0,
            })
    }
}
