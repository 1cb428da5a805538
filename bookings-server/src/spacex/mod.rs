//! SpaceX launch schedule client.
//!
//! This module provides the [`LaunchDataSource`] capability and its
//! implementations: an HTTP client for the public SpaceX v4 API and an
//! in-memory mock.
//!
//! Two endpoints are used:
//! - `GET /launchpads` lists every pad; lookups by id scan the list
//! - `POST /launches/query` takes a Mongo-style filter, which we restrict to
//!   one pad and one UTC calendar day

mod client;
mod error;
mod mock;
mod source;
mod types;

pub use client::{SpaceXClient, SpaceXConfig};
pub use error::LaunchDataError;
pub use mock::MockLaunchData;
pub use source::LaunchDataSource;
pub use types::{
    DateRange, LaunchDto, LaunchPadDto, LaunchQuery, LaunchQueryOptions, LaunchQueryRequest,
    LaunchQueryResponse,
};
