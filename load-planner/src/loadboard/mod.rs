//! JSON-file load board.
//!
//! Serves loads from a directory of JSON exports, each file an array of
//! board records. This is the load source the server runs against when no
//! live board integration is configured, and the one the tests exercise.
//!
//! Records follow the shape of a Truckstop search result: flat origin and
//! destination fields, `M/D/YY` or ISO pickup dates, and payment as a lump
//! sum from which the per-mile rate is derived.

mod board;
mod convert;
mod error;
mod types;

pub use board::JsonLoadBoard;
pub use convert::{ConversionError, convert_record};
pub use error::LoadBoardError;
pub use types::LoadRecord;
