//! Booking persistence.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Booking, BookingFilters, BookingId, Pagination};

use super::error::StoreError;

/// Keyed-row storage for bookings.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Insert a new booking. Fails with [`StoreError::Conflict`] if the id is taken.
    async fn create(&self, booking: Booking) -> Result<(), StoreError>;

    async fn get(&self, id: BookingId) -> Result<Booking, StoreError>;

    /// Bookings matching `filters`, oldest first, windowed by `pagination`.
    async fn list(
        &self,
        filters: &BookingFilters,
        pagination: Pagination,
    ) -> Result<Vec<Booking>, StoreError>;

    /// Remove a booking. Fails with [`StoreError::NotFound`] if absent.
    async fn delete(&self, id: BookingId) -> Result<(), StoreError>;

    /// Check the store can serve requests.
    async fn health(&self) -> Result<(), StoreError>;
}

/// Booking store held in process memory.
///
/// Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    rows: RwLock<HashMap<BookingId, Booking>>,
    closed: AtomicBool,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop serving requests. Every later call fails with
    /// [`StoreError::Unavailable`].
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store is closed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn create(&self, booking: Booking) -> Result<(), StoreError> {
        self.ensure_open()?;
        let mut rows = self.rows.write().await;
        if rows.contains_key(&booking.id) {
            return Err(StoreError::Conflict(booking.id));
        }
        rows.insert(booking.id, booking);
        Ok(())
    }

    async fn get(&self, id: BookingId) -> Result<Booking, StoreError> {
        self.ensure_open()?;
        let rows = self.rows.read().await;
        rows.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn list(
        &self,
        filters: &BookingFilters,
        pagination: Pagination,
    ) -> Result<Vec<Booking>, StoreError> {
        self.ensure_open()?;
        let rows = self.rows.read().await;

        let mut matching: Vec<&Booking> = rows.values().filter(|b| filters.matches(b)).collect();
        matching.sort_by_key(|b| (b.created_at, b.id));

        Ok(matching
            .into_iter()
            .skip(pagination.offset)
            .take(pagination.limit)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: BookingId) -> Result<(), StoreError> {
        self.ensure_open()?;
        let mut rows = self.rows.write().await;
        rows.remove(&id).map(|_| ()).ok_or(StoreError::NotFound(id))
    }

    async fn health(&self) -> Result<(), StoreError> {
        self.ensure_open()
    }
}
