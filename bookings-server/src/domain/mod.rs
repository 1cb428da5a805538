//! Domain types for the bookings service.
//!
//! Launch schedule reference data as seen by the rest of the crate, and the
//! booking records the service stores. Validating constructors live here so
//! that code receiving these types can trust them.

mod booking;
mod booking_id;
mod error;
mod launch;

pub use booking::{
    Booking, BookingFilters, DATE_FORMAT, Gender, NewBooking, Pagination, parse_calendar_date,
};
pub use booking_id::BookingId;
pub use error::DomainError;
pub use launch::{Launch, LaunchPad};
