//! Booking service error types.

use crate::availability::AvailabilityError;
use crate::domain::BookingId;

/// Errors from a [`BookingStore`](super::BookingStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No booking with this id
    #[error("booking not found: {0}")]
    NotFound(BookingId),

    /// A booking with this id already exists
    #[error("booking already exists: {0}")]
    Conflict(BookingId),

    /// Store is closed or unreachable
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Errors from the booking service.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// A launch is scheduled from the pad on the requested date
    #[error("unavailable date")]
    DateUnavailable,

    /// No booking with this id
    #[error("booking not found: {0}")]
    NotFound(BookingId),

    /// The launch schedule could not be consulted
    #[error("cannot determine availability: {0}")]
    Availability(#[from] AvailabilityError),

    /// Persistence failed
    #[error("booking store error: {0}")]
    Store(#[source] StoreError),
}

impl BookingError {
    /// Whether the request named a launch pad that does not exist.
    pub fn is_launch_pad_not_found(&self) -> bool {
        matches!(self, BookingError::Availability(e) if e.is_launch_pad_not_found())
    }
}

impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => BookingError::NotFound(id),
            other => BookingError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spacex::LaunchDataError;

    #[test]
    fn error_display() {
        assert_eq!(BookingError::DateUnavailable.to_string(), "unavailable date");

        let err = BookingError::Store(StoreError::Unavailable("closed".into()));
        assert_eq!(
            err.to_string(),
            "booking store error: store unavailable: closed"
        );
    }

    #[test]
    fn store_not_found_becomes_booking_not_found() {
        let id = BookingId::new_v4();
        let err = BookingError::from(StoreError::NotFound(id));
        assert!(matches!(err, BookingError::NotFound(found) if found == id));

        let err = BookingError::from(StoreError::Conflict(id));
        assert!(matches!(err, BookingError::Store(StoreError::Conflict(_))));
    }

    #[test]
    fn launch_pad_not_found_is_detected_through_wrapping() {
        let err = BookingError::from(AvailabilityError::LaunchPad {
            id: "invalid".into(),
            source: LaunchDataError::LaunchPadNotFound {
                id: "invalid".into(),
            },
        });
        assert!(err.is_launch_pad_not_found());
        assert!(
            err.to_string()
                .starts_with("cannot determine availability: unable to get launch pad for ID")
        );

        assert!(!BookingError::DateUnavailable.is_launch_pad_not_found());
    }
}
