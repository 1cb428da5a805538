//! Web layer for the bookings service.
//!
//! JSON endpoints for creating, listing, fetching and cancelling bookings,
//! plus a health check.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
