//! Load board record DTOs.

use serde::{Deserialize, Serialize};

/// One load as exported by the board.
///
/// Numeric fields are optional because the board leaves them blank rather
/// than sending zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadRecord {
    /// Board-assigned identifier.
    pub id: String,

    pub origin_city: String,
    pub origin_state: String,
    pub destination_city: String,
    pub destination_state: String,

    /// Pickup date, `YYYY-MM-DD` or `M/D/YY`.
    pub pickup_date: String,

    /// Delivery date in the same formats, if the shipper gave one.
    pub delivery_date: Option<String>,

    /// Loaded miles.
    pub mileage: Option<f64>,

    /// Posted payment in dollars.
    pub payment_amount: Option<f64>,

    /// Weight in pounds.
    pub weight: Option<f64>,

    /// Hours since posting.
    pub age: Option<f64>,

    /// Intermediate stops.
    pub stops: Option<u32>,

    /// Board equipment code, e.g. `V`, `RG`, `TK`.
    pub equipment: Option<String>,

    /// Miles from the searched point to the pickup.
    pub origin_distance: Option<f64>,

    /// Miles from the drop-off to the nearest recognised point.
    pub destination_distance: Option<f64>,
}
