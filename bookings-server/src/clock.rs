//! Time sources.
//!
//! Components that care about "now" take a [`SharedClock`] so tests can pin
//! the time. Production code uses [`DefaultClock`].

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};

pub use mockable::{Clock, DefaultClock};

/// Clock handle shared between components and tasks.
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// The wall clock.
pub fn system_clock() -> SharedClock {
    Arc::new(DefaultClock)
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        FixedClock(now)
    }

    /// Convenience for building a [`SharedClock`].
    pub fn shared(now: DateTime<Utc>) -> SharedClock {
        Arc::new(Self::new(now))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
