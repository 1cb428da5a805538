//! Booking records and the queries over them.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::{BookingId, DomainError};

/// Calendar date format used on the wire (`2024-12-31`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date, naming `field` in the error.
///
/// Every field must be zero-padded and no surrounding whitespace is allowed.
pub fn parse_calendar_date(s: &str, field: &'static str) -> Result<NaiveDate, DomainError> {
    let well_formed = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(DomainError::InvalidDate(field));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| DomainError::InvalidDate(field))
}

/// Passenger gender as recorded on a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Parse one of the accepted lowercase values.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(DomainError::InvalidGender(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated request to book a seat on a launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birthday: NaiveDate,
    pub launch_pad_id: String,
    pub destination_id: String,
    pub launch_date: NaiveDate,
}

impl NewBooking {
    /// The instant checked against the launch schedule: midnight UTC at the
    /// start of the launch date.
    pub fn launch_instant(&self) -> DateTime<Utc> {
        self.launch_date.and_time(NaiveTime::MIN).and_utc()
    }

    /// Turn the request into a stored booking.
    pub fn into_booking(self, id: BookingId, now: DateTime<Utc>) -> Booking {
        Booking {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            gender: self.gender,
            birthday: self.birthday,
            launch_pad_id: self.launch_pad_id,
            destination_id: self.destination_id,
            launch_date: self.launch_date,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A persisted booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub birthday: NaiveDate,
    pub launch_pad_id: String,
    pub destination_id: String,
    pub launch_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Optional filters for listing bookings. Every filter that is set must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFilters {
    pub launch_date: Option<NaiveDate>,
    pub launch_pad_id: Option<String>,
    pub destination_id: Option<String>,
}

impl BookingFilters {
    /// Check whether a booking satisfies all set filters.
    pub fn matches(&self, booking: &Booking) -> bool {
        self.launch_date.is_none_or(|d| booking.launch_date == d)
            && self
                .launch_pad_id
                .as_deref()
                .is_none_or(|id| booking.launch_pad_id == id)
            && self
                .destination_id
                .as_deref()
                .is_none_or(|id| booking.destination_id == id)
    }
}

/// Offset/limit window over a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
}

impl Pagination {
    pub const DEFAULT_LIMIT: usize = 10;
    pub const MAX_LIMIT: usize = 100;

    /// Create a window, clamping the limit to [`Pagination::MAX_LIMIT`].
    pub fn new(offset: usize, limit: usize) -> Self {
        Self {
            offset,
            limit: limit.min(Self::MAX_LIMIT),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_LIMIT)
    }
}
