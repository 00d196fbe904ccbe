//! City/state location type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a place is missing its city or state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid place: {reason}")]
pub struct InvalidPlace {
    reason: &'static str,
}

/// A US city and state pair, e.g. `Dallas, TX`.
///
/// Places compare exactly as given by the load board: no case folding or
/// whitespace normalization happens here. Two loads meet at a point only if
/// their city and state strings are identical.
///
/// # Examples
///
/// ```
/// use load_planner::domain::Place;
///
/// let dallas = Place::new("Dallas", "TX");
/// assert_eq!(dallas.to_string(), "Dallas, TX");
///
/// // Comparison is case-sensitive
/// assert_ne!(dallas, Place::new("DALLAS", "TX"));
///
/// // Empty components are rejected by `parse`
/// assert!(Place::parse("", "TX").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Place {
    pub city: String,
    pub state: String,
}

impl Place {
    /// Creates a place without validation.
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
        }
    }

    /// Creates a place, rejecting blank city or state.
    ///
    /// Surrounding whitespace is trimmed; everything else is kept verbatim.
    pub fn parse(city: &str, state: &str) -> Result<Self, InvalidPlace> {
        let city = city.trim();
        let state = state.trim();

        if city.is_empty() {
            return Err(InvalidPlace {
                reason: "city must not be empty",
            });
        }
        if state.is_empty() {
            return Err(InvalidPlace {
                reason: "state must not be empty",
            });
        }

        Ok(Self::new(city, state))
    }

    /// Free-form address understood by geocoding services.
    pub fn address(&self) -> String {
        format!("{}, {}, USA", self.city, self.state)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}
