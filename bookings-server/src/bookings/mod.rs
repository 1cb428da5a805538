//! Bookings: the service that gates creation on launch pad availability and
//! the store it persists to.

mod error;
mod service;
mod store;

pub use error::{BookingError, StoreError};
pub use service::BookingService;
pub use store::{BookingStore, InMemoryBookingStore};
