//! Launch pad availability.
//!
//! A pad is available on a date when the launch schedule shows no launch
//! from it during that UTC calendar day. The pad itself must exist; that is
//! checked first so an unknown pad never costs a launch query.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::spacex::{LaunchDataError, LaunchDataSource};

/// Why availability could not be determined.
#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    /// The pad lookup failed, either because the pad does not exist or
    /// because the provider could not be asked
    #[error("unable to get launch pad for ID {id}: {source}")]
    LaunchPad {
        id: String,
        #[source]
        source: LaunchDataError,
    },

    /// The launch query for the date failed
    #[error("unable to get launches for {id} on {date}: {source}")]
    Launches {
        id: String,
        date: NaiveDate,
        #[source]
        source: LaunchDataError,
    },
}

impl AvailabilityError {
    /// Whether the failure is an unknown launch pad rather than an upstream
    /// problem.
    pub fn is_launch_pad_not_found(&self) -> bool {
        matches!(self, AvailabilityError::LaunchPad { source, .. } if source.is_not_found())
    }
}

/// Decides whether a launch pad is free on a date.
#[derive(Clone)]
pub struct AvailabilityChecker {
    launch_data: Arc<dyn LaunchDataSource>,
}

impl AvailabilityChecker {
    pub fn new(launch_data: Arc<dyn LaunchDataSource>) -> Self {
        Self { launch_data }
    }

    /// Returns `Ok(true)` when no launch from `launch_pad_id` is scheduled on
    /// the UTC day of `date`, `Ok(false)` when at least one is.
    pub async fn is_date_available(
        &self,
        launch_pad_id: &str,
        date: DateTime<Utc>,
    ) -> Result<bool, AvailabilityError> {
        self.launch_data
            .launch_pad(launch_pad_id)
            .await
            .map_err(|source| AvailabilityError::LaunchPad {
                id: launch_pad_id.to_string(),
                source,
            })?;

        let launches = self
            .launch_data
            .launches_on(launch_pad_id, date)
            .await
            .map_err(|source| AvailabilityError::Launches {
                id: launch_pad_id.to_string(),
                date: date.date_naive(),
                source,
            })?;

        debug!(
            launch_pad_id,
            date = %date.date_naive(),
            launches = launches.len(),
            "checked availability"
        );

        Ok(launches.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    use crate::domain::{Launch, LaunchPad};
    use crate::spacex::MockLaunchData;

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

    fn launch(name: &str, date: NaiveDate) -> Launch {
        Launch {
            name: name.to_string(),
            date_utc: Utc.from_utc_datetime(&date.and_hms_opt(10, 0, 0).unwrap()),
            launch_pad_id: "pad-1".to_string(),
            success: false,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at_midnight(date: NaiveDate) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
    }

    /// Two pads; pad-1 has a launch on 2025-11-21.
    fn two_pads() -> Arc<MockLaunchData> {
        Arc::new(
            MockLaunchData::new()
                .with_pad(pad("pad-1"))
                .with_pad(pad("pad-2"))
                .with_launches(
                    "pad-1",
                    day(2025, 11, 21),
                    vec![launch("Launch A", day(2025, 11, 21))],
                ),
        )
    }

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn date_with_launch_is_unavailable() {
        let checker = AvailabilityChecker::new(two_pads());
        let available = checker
            .is_date_available("pad-1", at_midnight(day(2025, 11, 21)))
            .await
            .unwrap();
        assert!(!available);
    }

    #[tokio::test]
    async fn date_without_launch_is_available() {
        let checker = AvailabilityChecker::new(two_pads());
        let available = checker
            .is_date_available("pad-1", at_midnight(day(2025, 11, 22)))
            .await
            .unwrap();
        assert!(available);

        let available = checker
            .is_date_available("pad-2", at_midnight(day(2025, 11, 21)))
            .await
            .unwrap();
        assert!(available);
    }

    #[tokio::test]
    async fn unknown_pad_fails_before_querying_launches() {
        let mock = two_pads();
        let checker = AvailabilityChecker::new(mock.clone());

        let err = checker
            .is_date_available("invalid", at_midnight(day(2025, 11, 21)))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("unable to get launch pad for ID"));
        assert!(err.is_launch_pad_not_found());
        assert_eq!(mock.launch_calls(), 0);
    }

    #[tokio::test]
    async fn pad_lookup_outage_is_not_not_found() {
        let mock = two_pads();
        mock.fail_pad_lookups(Some(502));
        let checker = AvailabilityChecker::new(mock.clone());

        let err = checker
            .is_date_available("pad-1", at_midnight(day(2025, 11, 21)))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("unable to get launch pad for ID"));
        assert!(!err.is_launch_pad_not_found());
    }

    #[tokio::test]
    async fn launch_query_failure_is_reported() {
        let mock = two_pads();
        mock.fail_launch_queries(Some(500));
        let checker = AvailabilityChecker::new(mock.clone());

        let err = checker
            .is_date_available("pad-1", at_midnight(day(2025, 11, 21)))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("unable to get launches"));
        assert!(!err.is_launch_pad_not_found());
        assert!(matches!(
            err,
            AvailabilityError::Launches {
                source: LaunchDataError::Api { status: 500, .. },
                ..
            }
        ));
    }

    proptest! {
        #[test]
        fn any_unknown_pad_is_rejected(id in "[a-z0-9-]{1,24}", offset in -400i64..400) {
            prop_assume!(id != "pad-1" && id != "pad-2");
            let date = at_midnight(day(2025, 11, 21)) + chrono::Duration::days(offset);
            let checker = AvailabilityChecker::new(two_pads());

            let result = runtime().block_on(checker.is_date_available(&id, date));
            let err = result.unwrap_err();
            prop_assert!(err.is_launch_pad_not_found());
            prop_assert!(err.to_string().contains("unable to get launch pad for ID"));
        }

        #[test]
        fn availability_is_emptiness(count in 0usize..6) {
            let date = day(2024, 6, 1);
            let launches = (0..count)
                .map(|i| launch(&format!("Launch {i}"), date))
                .collect();
            let mock = MockLaunchData::new()
                .with_pad(pad("pad-1"))
                .with_launches("pad-1", date, launches);
            let checker = AvailabilityChecker::new(Arc::new(mock));

            let available = runtime()
                .block_on(checker.is_date_available("pad-1", at_midnight(date)))
                .unwrap();
            prop_assert_eq!(available, count == 0);
        }
    }
}
