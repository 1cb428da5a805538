//! Booking use cases.

use std::sync::Arc;

use tracing::{info, warn};

use crate::availability::AvailabilityChecker;
use crate::clock::SharedClock;
use crate::domain::{Booking, BookingFilters, BookingId, NewBooking, Pagination};

use super::error::BookingError;
use super::store::BookingStore;

/// Creates, lists and deletes bookings.
///
/// A booking is only accepted when the launch pad exists and has no launch
/// scheduled on the requested date.
pub struct BookingService {
    store: Arc<dyn BookingStore>,
    availability: AvailabilityChecker,
    clock: SharedClock,
}

impl BookingService {
    pub fn new(
        store: Arc<dyn BookingStore>,
        availability: AvailabilityChecker,
        clock: SharedClock,
    ) -> Self {
        Self {
            store,
            availability,
            clock,
        }
    }

    /// Check availability, then persist the booking with a fresh id.
    pub async fn create_booking(&self, new: NewBooking) -> Result<Booking, BookingError> {
        let available = self
            .availability
            .is_date_available(&new.launch_pad_id, new.launch_instant())
            .await?;

        if !available {
            warn!(
                launch_pad_id = %new.launch_pad_id,
                launch_date = %new.launch_date,
                "launch scheduled, rejecting booking"
            );
            return Err(BookingError::DateUnavailable);
        }

        let booking = new.into_booking(BookingId::new_v4(), self.clock.utc());
        self.store.create(booking.clone()).await?;

        info!(
            id = %booking.id,
            launch_pad_id = %booking.launch_pad_id,
            launch_date = %booking.launch_date,
            "booking created"
        );
        Ok(booking)
    }

    pub async fn list_bookings(
        &self,
        filters: &BookingFilters,
        pagination: Pagination,
    ) -> Result<Vec<Booking>, BookingError> {
        Ok(self.store.list(filters, pagination).await?)
    }

    pub async fn get_booking(&self, id: BookingId) -> Result<Booking, BookingError> {
        Ok(self.store.get(id).await?)
    }

    pub async fn delete_booking(&self, id: BookingId) -> Result<(), BookingError> {
        self.store.delete(id).await?;
        info!(%id, "booking deleted");
        Ok(())
    }

    /// Whether the backing store can serve requests.
    pub async fn health(&self) -> Result<(), BookingError> {
        Ok(self.store.health().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    use crate::bookings::{InMemoryBookingStore, StoreError};
    use crate::clock::FixedClock;
    use crate::domain::{Gender, Launch, LaunchPad};
    use crate::spacex::MockLaunchData;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pad(id: &str) -> LaunchPad {
        LaunchPad {
            id: id.to_string(),
            name: id.to_uppercase(),
            full_name: String::new(),
            locality: String::new(),
            region: String::new(),
            status: "active".to_string(),
        }
    }

    fn request(pad: &str, launch_date: NaiveDate) -> NewBooking {
        NewBooking {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            gender: Gender::Female,
            birthday: day(1990, 1, 1),
            launch_pad_id: pad.into(),
            destination_id: "dest-456".into(),
            launch_date,
        }
    }

    struct Fixture {
        launch_data: Arc<MockLaunchData>,
        store: Arc<InMemoryBookingStore>,
        service: BookingService,
    }

    fn fixture() -> Fixture {
        let launch_data = Arc::new(
            MockLaunchData::new()
                .with_pad(pad("valid-pad"))
                .with_launches(
                    "valid-pad",
                    day(2024, 12, 24),
                    vec![Launch {
                        name: "Starship".into(),
                        date_utc: Utc.with_ymd_and_hms(2024, 12, 24, 18, 0, 0).unwrap(),
                        launch_pad_id: "valid-pad".into(),
                        success: false,
                    }],
                ),
        );
        let store = Arc::new(InMemoryBookingStore::new());
        let service = BookingService::new(
            store.clone(),
            AvailabilityChecker::new(launch_data.clone()),
            FixedClock::shared(now()),
        );
        Fixture {
            launch_data,
            store,
            service,
        }
    }

    #[tokio::test]
    async fn create_stamps_and_persists() {
        let f = fixture();

        let booking = f
            .service
            .create_booking(request("valid-pad", day(2024, 12, 31)))
            .await
            .unwrap();

        assert_eq!(booking.created_at, now());
        assert_eq!(booking.updated_at, now());
        assert_eq!(booking.launch_date, day(2024, 12, 31));
        assert_eq!(f.store.get(booking.id).await.unwrap(), booking);
    }

    #[tokio::test]
    async fn create_rejects_launch_day() {
        let f = fixture();

        let err = f
            .service
            .create_booking(request("valid-pad", day(2024, 12, 24)))
            .await
            .unwrap_err();

        assert!(matches!(err, BookingError::DateUnavailable));
        let stored = f
            .store
            .list(&BookingFilters::default(), Pagination::default())
            .await
            .unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn create_rejects_unknown_pad() {
        let f = fixture();

        let err = f
            .service
            .create_booking(request("invalid-pad", day(2024, 12, 31)))
            .await
            .unwrap_err();

        assert!(err.is_launch_pad_not_found());
        assert_eq!(f.launch_data.launch_calls(), 0);
    }

    #[tokio::test]
    async fn upstream_failure_is_not_a_missing_pad() {
        let f = fixture();
        f.launch_data.fail_launch_queries(Some(500));

        let err = f
            .service
            .create_booking(request("valid-pad", day(2024, 12, 31)))
            .await
            .unwrap_err();

        assert!(matches!(err, BookingError::Availability(_)));
        assert!(!err.is_launch_pad_not_found());
        assert!(err.to_string().contains("unable to get launches"));
    }

    #[tokio::test]
    async fn store_failure_surfaces() {
        let f = fixture();
        f.store.close();

        let err = f
            .service
            .create_booking(request("valid-pad", day(2024, 12, 31)))
            .await
            .unwrap_err();

        assert!(matches!(err, BookingError::Store(StoreError::Unavailable(_))));
        assert!(f.service.health().await.is_err());
    }

    #[tokio::test]
    async fn get_list_and_delete() {
        let f = fixture();
        let first = f
            .service
            .create_booking(request("valid-pad", day(2024, 12, 30)))
            .await
            .unwrap();
        let second = f
            .service
            .create_booking(request("valid-pad", day(2024, 12, 31)))
            .await
            .unwrap();

        assert_eq!(f.service.get_booking(first.id).await.unwrap(), first);

        let filters = BookingFilters {
            launch_date: Some(day(2024, 12, 31)),
            ..BookingFilters::default()
        };
        let listed = f
            .service
            .list_bookings(&filters, Pagination::default())
            .await
            .unwrap();
        assert_eq!(listed, vec![second.clone()]);

        f.service.delete_booking(second.id).await.unwrap();
        assert!(matches!(
            f.service.get_booking(second.id).await,
            Err(BookingError::NotFound(id)) if id == second.id
        ));
        assert!(matches!(
            f.service.delete_booking(second.id).await,
            Err(BookingError::NotFound(_))
        ));
    }
}
