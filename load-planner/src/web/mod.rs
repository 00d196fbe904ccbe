//! Web layer for the freight load planner.
//!
//! Provides JSON endpoints for planning trips, pairing backhauls and
//! totting up routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
