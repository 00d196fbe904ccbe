//! Domain types for the freight trip planner.
//!
//! This module contains the core value types shared by scoring, search and
//! route building. Types that carry invariants enforce them at construction
//! time, so code that receives them can trust their validity.

mod calendar;
mod equipment;
mod error;
mod load;
mod pair;
mod place;
mod route;
mod segment;

pub use calendar::{
    MILES_PER_DAY, add_days, parse_board_date, parse_date_or_today, parse_iso_date, travel_days,
};
pub use equipment::{DEADHEAD_CODE, EquipmentType, InvalidEquipment};
pub use error::DomainError;
pub use load::Load;
pub use pair::{LoadPair, pair_deadhead};
pub use place::{InvalidPlace, Place};
pub use route::Route;
pub use segment::{Deadhead, Segment};
