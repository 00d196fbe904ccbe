//! Conversion from board records to domain loads.

use tracing::debug;

use crate::domain::{EquipmentType, InvalidPlace, Load, Place, parse_board_date};

use super::types::LoadRecord;

/// Error converting a board record.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    #[error("load {id}: unparseable pickup date {date:?}")]
    PickupDate { id: String, date: String },

    #[error("load {id}: {source}")]
    Place { id: String, source: InvalidPlace },
}

/// Convert a board record into a [`Load`].
///
/// The per-mile rate is payment over mileage when both are positive, and 0
/// otherwise. Blank or zero weights count as unknown. Unrecognised equipment
/// codes and delivery dates are dropped rather than failing the record.
pub fn convert_record(record: &LoadRecord) -> Result<Load, ConversionError> {
    let ship_date =
        parse_board_date(&record.pickup_date).ok_or_else(|| ConversionError::PickupDate {
            id: record.id.clone(),
            date: record.pickup_date.clone(),
        })?;

    let place = |city: &str, state: &str| {
        Place::parse(city, state).map_err(|source| ConversionError::Place {
            id: record.id.clone(),
            source,
        })
    };
    let origin = place(&record.origin_city, &record.origin_state)?;
    let destination = place(&record.destination_city, &record.destination_state)?;

    let mut load = Load::new(record.id.clone(), origin, destination, ship_date);

    let mileage = record.mileage.unwrap_or(0.0);
    let payment = record.payment_amount.unwrap_or(0.0);
    load.distance = mileage;
    load.pay_rate = payment;
    load.rate_per_mile_est = if mileage > 0.0 && payment > 0.0 {
        payment / mileage
    } else {
        0.0
    };

    load.weight = record.weight.filter(|w| *w > 0.0);
    load.age_hours = record.age;
    load.stops = record.stops;
    load.origin_distance = record.origin_distance.unwrap_or(0.0);
    load.destination_distance = record.destination_distance.unwrap_or(0.0);

    load.equipment = record.equipment.as_deref().and_then(|code| {
        let parsed = code.parse::<EquipmentType>().ok();
        if parsed.is_none() {
            debug!(load = %record.id, code, "Unrecognised equipment code");
        }
        parsed
    });

    load.receive_date = record
        .delivery_date
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .and_then(parse_board_date);

    Ok(load)
}
