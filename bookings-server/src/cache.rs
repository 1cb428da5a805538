//! Caching layer for launch data.
//!
//! Launch pads are treated as static reference data and kept for the life of
//! the process. Launch lists are keyed by (pad, UTC calendar day) and only
//! stored when the queried date is strictly before the clock's "now": past
//! schedules are settled, upcoming ones can still move, so present and future
//! dates always go upstream.
//!
//! Failed lookups that could have been cached come back wrapped with the
//! operation that failed; lookups for upcoming dates pass errors through.
//!
//! Entries never expire and the maps are unbounded. Both maps are concurrent,
//! so a single instance can be shared across request tasks. Two tasks missing
//! the same key at once may both call upstream; the later insert wins.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::clock::SharedClock;
use crate::domain::{DATE_FORMAT, Launch, LaunchPad};
use crate::spacex::{LaunchDataError, LaunchDataSource};

/// Cached launch list entry.
type LaunchesEntry = Arc<Vec<Launch>>;

/// Cache key for a launch list: `{pad}_{YYYY-MM-DD}`.
pub fn launch_key(launch_pad_id: &str, date: DateTime<Utc>) -> String {
    format!("{launch_pad_id}_{}", date.format(DATE_FORMAT))
}

/// Storage for launch data responses.
pub struct LaunchDataCache {
    /// Launch pads keyed by id.
    pads: MokaCache<String, Arc<LaunchPad>>,

    /// Launch lists keyed by [`launch_key`].
    launches: MokaCache<String, LaunchesEntry>,
}

impl LaunchDataCache {
    /// Create an empty, unbounded cache with no expiry.
    pub fn new() -> Self {
        Self {
            pads: MokaCache::builder().build(),
            launches: MokaCache::builder().build(),
        }
    }

    pub async fn get_pad(&self, launch_pad_id: &str) -> Option<Arc<LaunchPad>> {
        self.pads.get(launch_pad_id).await
    }

    pub async fn insert_pad(&self, launch_pad_id: String, pad: Arc<LaunchPad>) {
        self.pads.insert(launch_pad_id, pad).await;
    }

    pub async fn get_launches(&self, key: &str) -> Option<LaunchesEntry> {
        self.launches.get(key).await
    }

    pub async fn insert_launches(&self, key: String, entry: LaunchesEntry) {
        self.launches.insert(key, entry).await;
    }

    /// Number of cached launch pads.
    pub async fn pad_entry_count(&self) -> u64 {
        self.pads.run_pending_tasks().await;
        self.pads.entry_count()
    }

    /// Number of cached launch lists.
    pub async fn launch_entry_count(&self) -> u64 {
        self.launches.run_pending_tasks().await;
        self.launches.entry_count()
    }
}

impl Default for LaunchDataCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Launch data source with caching.
///
/// Wraps any [`LaunchDataSource`] and is one itself, so it can be dropped in
/// wherever the uncached client would go.
pub struct CachedLaunchData {
    source: Arc<dyn LaunchDataSource>,
    clock: SharedClock,
    cache: LaunchDataCache,
}

impl CachedLaunchData {
    /// Create a new cached source. The cache starts empty.
    pub fn new(source: Arc<dyn LaunchDataSource>, clock: SharedClock) -> Self {
        Self {
            source,
            clock,
            cache: LaunchDataCache::new(),
        }
    }

    /// Access the underlying cache (for diagnostics).
    pub fn cache(&self) -> &LaunchDataCache {
        &self.cache
    }
}

#[async_trait]
impl LaunchDataSource for CachedLaunchData {
    async fn launch_pad(&self, launch_pad_id: &str) -> Result<LaunchPad, LaunchDataError> {
        if let Some(cached) = self.cache.get_pad(launch_pad_id).await {
            debug!(launch_pad_id, "launch pad cache hit");
            return Ok((*cached).clone());
        }

        // Errors propagate without touching the cache
        let pad = self
            .source
            .launch_pad(launch_pad_id)
            .await
            .map_err(|e| e.context("unable to get launch pad"))?;
        self.cache
            .insert_pad(launch_pad_id.to_string(), Arc::new(pad.clone()))
            .await;

        Ok(pad)
    }

    async fn launches_on(
        &self,
        launch_pad_id: &str,
        date: DateTime<Utc>,
    ) -> Result<Vec<Launch>, LaunchDataError> {
        let now = self.clock.utc();
        if date >= now {
            debug!(launch_pad_id, %date, "date not in the past, bypassing cache");
            return self.source.launches_on(launch_pad_id, date).await;
        }

        let key = launch_key(launch_pad_id, date);
        if let Some(cached) = self.cache.get_launches(&key).await {
            debug!(%key, "launch cache hit");
            return Ok((*cached).clone());
        }

        let launches = self
            .source
            .launches_on(launch_pad_id, date)
            .await
            .map_err(|e| e.context("unable to get launches"))?;
        self.cache
            .insert_launches(key, Arc::new(launches.clone()))
            .await;

        Ok(launches)
    }
}
