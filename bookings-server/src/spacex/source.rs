//! The launch data capability shared by the HTTP client, the cache and
//! test doubles.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Launch, LaunchPad};

use super::error::LaunchDataError;

/// Read-only access to launch pads and the launches scheduled from them.
#[async_trait]
pub trait LaunchDataSource: Send + Sync {
    /// Look up a launch pad by identifier.
    ///
    /// Fails with [`LaunchDataError::LaunchPadNotFound`] if no pad matches.
    async fn launch_pad(&self, launch_pad_id: &str) -> Result<LaunchPad, LaunchDataError>;

    /// Launches from `launch_pad_id` during the UTC calendar day of `date`.
    ///
    /// An empty list means nothing is scheduled that day.
    async fn launches_on(
        &self,
        launch_pad_id: &str,
        date: DateTime<Utc>,
    ) -> Result<Vec<Launch>, LaunchDataError>;
}
