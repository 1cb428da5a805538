//! Domain error types.
//!
//! These errors represent validation failures of booking input. They are
//! distinct from upstream and storage errors.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A required field was empty or absent
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Gender outside the accepted set
    #[error("invalid gender value, accepted values for gender: male, female, other")]
    InvalidGender(String),

    /// A date field did not parse as a calendar date
    #[error("invalid {0}, accepted format: YYYY-MM-DD")]
    InvalidDate(&'static str),

    /// Booking identifier is not a UUID
    #[error("invalid booking id: {0}")]
    InvalidBookingId(String),
}
