//! In-memory launch data for tests and offline runs.
//!
//! Serves a fixed set of pads and per-day launch lists, counts every call so
//! callers can assert how often the "upstream" was hit, and can be told to
//! fail with an HTTP-like status.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{Launch, LaunchPad};

use super::error::LaunchDataError;
use super::source::LaunchDataSource;

/// Mock launch data source backed by in-memory tables.
#[derive(Debug, Default)]
pub struct MockLaunchData {
    pads: Vec<LaunchPad>,
    launches: HashMap<(String, NaiveDate), Vec<Launch>>,
    pad_calls: AtomicUsize,
    launch_calls: AtomicUsize,
    pad_failure: Mutex<Option<u16>>,
    launch_failure: Mutex<Option<u16>>,
}

impl MockLaunchData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a launch pad.
    pub fn with_pad(mut self, pad: LaunchPad) -> Self {
        self.pads.push(pad);
        self
    }

    /// Set the launches returned for `launch_pad_id` on `date`.
    pub fn with_launches(
        mut self,
        launch_pad_id: &str,
        date: NaiveDate,
        launches: Vec<Launch>,
    ) -> Self {
        self.launches
            .insert((launch_pad_id.to_string(), date), launches);
        self
    }

    /// Make pad lookups fail with the given status, or succeed again with `None`.
    pub fn fail_pad_lookups(&self, status: Option<u16>) {
        *lock(&self.pad_failure) = status;
    }

    /// Make launch queries fail with the given status, or succeed again with `None`.
    pub fn fail_launch_queries(&self, status: Option<u16>) {
        *lock(&self.launch_failure) = status;
    }

    /// Number of pad lookups served, including failed ones.
    pub fn pad_calls(&self) -> usize {
        self.pad_calls.load(Ordering::SeqCst)
    }

    /// Number of launch queries served, including failed ones.
    pub fn launch_calls(&self) -> usize {
        self.launch_calls.load(Ordering::SeqCst)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn injected(status: Option<u16>) -> Result<(), LaunchDataError> {
    match status {
        Some(status) => Err(LaunchDataError::Api {
            status,
            message: "injected failure".to_string(),
        }),
        None => Ok(()),
    }
}

#[async_trait]
impl LaunchDataSource for MockLaunchData {
    async fn launch_pad(&self, launch_pad_id: &str) -> Result<LaunchPad, LaunchDataError> {
        self.pad_calls.fetch_add(1, Ordering::SeqCst);
        injected(*lock(&self.pad_failure))?;

        self.pads
            .iter()
            .find(|pad| pad.id == launch_pad_id)
            .cloned()
            .ok_or_else(|| LaunchDataError::LaunchPadNotFound {
                id: launch_pad_id.to_string(),
            })
    }

    async fn launches_on(
        &self,
        launch_pad_id: &str,
        date: DateTime<Utc>,
    ) -> Result<Vec<Launch>, LaunchDataError> {
        self.launch_calls.fetch_add(1, Ordering::SeqCst);
        injected(*lock(&self.launch_failure))?;

        Ok(self
            .launches
            .get(&(launch_pad_id.to_string(), date.date_naive()))
            .cloned()
            .unwrap_or_default())
    }
}
