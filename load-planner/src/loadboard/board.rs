//! In-memory load board loaded from JSON files.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::{Load, Place};
use crate::planner::{LoadQuery, LoadSource, LoadSourceError};

use super::convert::convert_record;
use super::error::LoadBoardError;
use super::types::LoadRecord;

/// Load board that serves loads from JSON files.
///
/// Search is an exact match on pickup place and date, like the live board's
/// "origin city + pickup date" search, with weight and equipment filters.
/// Destination and backhaul hints are accepted and ignored.
#[derive(Debug, Clone, Default)]
pub struct JsonLoadBoard {
    /// Loads keyed by pickup place.
    loads: HashMap<Place, Vec<Load>>,
}

impl JsonLoadBoard {
    /// Load every `*.json` file in `data_dir`.
    ///
    /// Each file holds an array of [`LoadRecord`]s. Records that can't be
    /// converted are skipped with a warning; unreadable or malformed files
    /// are an error, as is a directory with no JSON files.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, LoadBoardError> {
        let data_dir = data_dir.as_ref();
        let io_error = |path: &Path| {
            let path = path.to_path_buf();
            move |source| LoadBoardError::Io { path, source }
        };

        let mut records = Vec::new();
        let mut files = 0;

        for entry in std::fs::read_dir(data_dir).map_err(io_error(data_dir))? {
            let path = entry.map_err(io_error(data_dir))?.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(io_error(&path))?;
            let batch: Vec<LoadRecord> =
                serde_json::from_str(&json).map_err(|source| LoadBoardError::Json {
                    path: path.clone(),
                    source,
                })?;

            debug!(file = ?path, records = batch.len(), "Read load file");
            records.extend(batch);
            files += 1;
        }

        if files == 0 {
            return Err(LoadBoardError::Empty(data_dir.to_path_buf()));
        }

        let board = Self::from_records(records);
        info!(dir = ?data_dir, files, loads = board.len(), "Loaded load board");
        Ok(board)
    }

    /// Build a board from records already in memory.
    pub fn from_records(records: impl IntoIterator<Item = LoadRecord>) -> Self {
        let mut loads: HashMap<Place, Vec<Load>> = HashMap::new();

        for record in records {
            match convert_record(&record) {
                Ok(load) => loads.entry(load.origin.clone()).or_default().push(load),
                Err(e) => warn!(error = %e, "Skipping load record"),
            }
        }

        Self { loads }
    }

    /// Number of loads on the board.
    pub fn len(&self) -> usize {
        self.loads.values().map(Vec::len).sum()
    }

    /// Returns true if the board has no loads.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    fn matches(load: &Load, query: &LoadQuery) -> bool {
        let max_weight = f64::from(query.max_weight);
        load.ship_date == query.date
            && load.weight.is_none_or(|w| w <= max_weight)
            && load
                .equipment
                .is_some_and(|e| query.equipment.contains(&e))
    }
}

impl LoadSource for JsonLoadBoard {
    async fn search(&self, query: &LoadQuery) -> Result<Vec<Load>, LoadSourceError> {
        if query.equipment.is_empty() {
            return Err(LoadSourceError::InvalidQuery(
                "no equipment types requested".to_string(),
            ));
        }

        let loads: Vec<Load> = self
            .loads
            .get(&query.origin)
            .into_iter()
            .flatten()
            .filter(|load| Self::matches(load, query))
            .cloned()
            .collect();

        debug!(
            origin = %query.origin,
            date = %query.date,
            backhaul = query.backhaul,
            found = loads.len(),
            "Board search"
        );

        Ok(loads)
    }
}
