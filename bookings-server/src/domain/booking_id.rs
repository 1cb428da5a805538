//! Booking identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DomainError;

/// Unique identifier of a booking.
///
/// Identifiers are random (v4) UUIDs assigned when the booking is created.
///
/// # Examples
///
/// ```
/// use bookings_server::domain::BookingId;
///
/// let id = BookingId::parse("0aadd991-953d-48d3-a4a8-8e1182a2c723").unwrap();
/// assert_eq!(id.to_string(), "0aadd991-953d-48d3-a4a8-8e1182a2c723");
///
/// assert!(BookingId::parse("not-a-uuid").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(Uuid);

impl BookingId {
    /// Generate a fresh random identifier.
    pub fn new_v4() -> Self {
        BookingId(Uuid::new_v4())
    }

    /// Parse an identifier from its hyphenated string form.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(s)
            .map(BookingId)
            .map_err(|_| DomainError::InvalidBookingId(s.to_string()))
    }
}

impl fmt::Debug for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookingId({})", self.0)
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
