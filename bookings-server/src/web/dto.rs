//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Booking, BookingFilters, BookingId, DATE_FORMAT, DomainError, Gender, NewBooking, Pagination,
    parse_calendar_date,
};

/// Request to create a booking.
///
/// Every field is a plain string so that missing or malformed values can be
/// reported one at a time instead of failing deserialization.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateBookingRequest {
    pub first_name: String,
    pub last_name: String,
    /// One of `male`, `female`, `other`
    pub gender: String,
    /// `YYYY-MM-DD`
    pub birthday: String,
    pub launch_pad_id: String,
    pub destination_id: String,
    /// `YYYY-MM-DD`
    pub launch_date: String,
}

impl CreateBookingRequest {
    /// Validate into a domain request. Checks run in a fixed order and the
    /// first failure is returned.
    pub fn validate(self) -> Result<NewBooking, DomainError> {
        let required = [
            (&self.destination_id, "destination id"),
            (&self.launch_pad_id, "launchpad id"),
            (&self.birthday, "birthday"),
            (&self.first_name, "first name"),
            (&self.last_name, "last name"),
            (&self.gender, "gender"),
            (&self.launch_date, "launch date"),
        ];
        if let Some((_, name)) = required.iter().find(|(value, _)| value.is_empty()) {
            return Err(DomainError::MissingField(*name));
        }

        let gender = Gender::parse(&self.gender)?;
        let birthday = parse_calendar_date(&self.birthday, "birthday")?;
        let launch_date = parse_calendar_date(&self.launch_date, "launch date")?;

        Ok(NewBooking {
            first_name: self.first_name,
            last_name: self.last_name,
            gender,
            birthday,
            launch_pad_id: self.launch_pad_id,
            destination_id: self.destination_id,
            launch_date,
        })
    }
}

/// A booking as rendered to clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingView {
    pub id: BookingId,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birthday: String,
    pub launch_pad_id: String,
    pub destination_id: String,
    pub launch_date: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookingView {
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            first_name: booking.first_name.clone(),
            last_name: booking.last_name.clone(),
            gender: booking.gender.to_string(),
            birthday: booking.birthday.format(DATE_FORMAT).to_string(),
            launch_pad_id: booking.launch_pad_id.clone(),
            destination_id: booking.destination_id.clone(),
            launch_date: booking.launch_date.format(DATE_FORMAT).to_string(),
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

/// Response wrapping a single booking.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking: BookingView,
}

/// Response to a booking listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListBookingsResponse {
    pub bookings: Vec<BookingView>,
}

/// Query string of `GET /bookings`.
///
/// Empty values are treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ListBookingsQuery {
    pub offset: Option<String>,
    pub limit: Option<String>,
    /// `YYYY-MM-DD`
    pub launch_date: Option<String>,
    pub launch_pad_id: Option<String>,
    pub destination_id: Option<String>,
}

impl ListBookingsQuery {
    /// Parse into filters and a pagination window.
    pub fn parse(self) -> Result<(BookingFilters, Pagination), String> {
        let offset = parse_count(self.offset, "offset", 0)?;
        let limit = parse_count(self.limit, "limit", Pagination::DEFAULT_LIMIT)?;

        let launch_date = non_empty(self.launch_date)
            .map(|d| parse_calendar_date(&d, "launch_date"))
            .transpose()
            .map_err(|_| "invalid launch_date".to_string())?;

        let filters = BookingFilters {
            launch_date,
            launch_pad_id: non_empty(self.launch_pad_id),
            destination_id: non_empty(self.destination_id),
        };

        Ok((filters, Pagination::new(offset, limit)))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_count(value: Option<String>, name: &str, default: usize) -> Result<usize, String> {
    let Some(raw) = non_empty(value) else {
        return Ok(default);
    };
    let parsed: i64 = raw
        .parse()
        .map_err(|_| format!("unable to parse {name}"))?;
    usize::try_from(parsed).map_err(|_| format!("invalid {name}"))
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
