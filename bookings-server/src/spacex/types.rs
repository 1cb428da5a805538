//! SpaceX API request and response DTOs.
//!
//! These types map directly to the v4 JSON API. Only the fields the service
//! reads are declared; everything else in the payload is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DATE_FORMAT, Launch, LaunchPad};

/// An entry of `GET /launchpads`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchPadDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub status: String,
}

/// A launch document returned by `POST /launches/query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchDto {
    pub name: String,
    pub date_utc: DateTime<Utc>,
    pub launchpad: String,
    /// `null` for launches that have not flown yet.
    #[serde(default)]
    pub success: Option<bool>,
}

/// Paginated envelope of `POST /launches/query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchQueryResponse {
    pub docs: Vec<LaunchDto>,
}

/// Body of `POST /launches/query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchQueryRequest {
    pub query: LaunchQuery,
    pub options: LaunchQueryOptions,
}

/// Mongo-style filter on pad and launch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchQuery {
    pub launchpad: String,
    pub date_utc: DateRange,
}

/// Half-open timestamp range, serialised with Mongo operator names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "$gte")]
    pub gte: String,
    #[serde(rename = "$lt")]
    pub lt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchQueryOptions {
    pub limit: u32,
}

impl LaunchQueryRequest {
    /// Query for launches from `launch_pad_id` during the UTC calendar day
    /// containing `date`, returning at most `limit` documents.
    pub fn for_day(launch_pad_id: &str, date: DateTime<Utc>, limit: u32) -> Self {
        let day = date.format(DATE_FORMAT);
        Self {
            query: LaunchQuery {
                launchpad: launch_pad_id.to_string(),
                date_utc: DateRange {
                    gte: format!("{day}T00:00:00.000Z"),
                    lt: format!("{day}T23:59:59.999Z"),
                },
            },
            options: LaunchQueryOptions { limit },
        }
    }
}

impl From<LaunchPadDto> for LaunchPad {
    fn from(dto: LaunchPadDto) -> Self {
        LaunchPad {
            id: dto.id,
            name: dto.name,
            full_name: dto.full_name,
            locality: dto.locality,
            region: dto.region,
            status: dto.status,
        }
    }
}

impl From<LaunchDto> for Launch {
    fn from(dto: LaunchDto) -> Self {
        Launch {
            name: dto.name,
            date_utc: dto.date_utc,
            launch_pad_id: dto.launchpad,
            success: dto.success.unwrap_or(false),
        }
    }
}
