//! Application state for the web layer.

use std::sync::Arc;

use crate::bookings::BookingService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Booking use cases
    pub bookings: Arc<BookingService>,
}

impl AppState {
    pub fn new(bookings: BookingService) -> Self {
        Self {
            bookings: Arc::new(bookings),
        }
    }
}
