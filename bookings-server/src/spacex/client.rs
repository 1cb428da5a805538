//! SpaceX v4 HTTP client.
//!
//! Provides async methods for querying launch pads and launches, and maps
//! transport and status failures onto [`LaunchDataError`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{Launch, LaunchPad};

use super::error::LaunchDataError;
use super::source::LaunchDataSource;
use super::types::{LaunchPadDto, LaunchQueryRequest, LaunchQueryResponse};

/// Default base URL for the SpaceX API.
const DEFAULT_BASE_URL: &str = "https://api.spacexdata.com/v4";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default cap on documents returned by a launch query.
const DEFAULT_QUERY_LIMIT: u32 = 5;

/// How much of an unparseable body to keep in the error message.
const BODY_SNIPPET_CHARS: usize = 200;

/// Configuration for the SpaceX client.
#[derive(Debug, Clone)]
pub struct SpaceXConfig {
    /// Base URL for the API (defaults to the public v4 API)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum launches requested per day query
    pub query_limit: u32,
}

impl Default for SpaceXConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
            query_limit: DEFAULT_QUERY_LIMIT,
        }
    }
}

impl SpaceXConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the per-query result cap.
    pub fn with_query_limit(mut self, limit: u32) -> Self {
        self.query_limit = limit;
        self
    }
}

/// SpaceX API client.
///
/// Uses a semaphore to limit concurrent requests and stay clear of the
/// provider's rate limit. No retries are attempted.
#[derive(Debug, Clone)]
pub struct SpaceXClient {
    http: reqwest::Client,
    base_url: String,
    query_limit: u32,
    semaphore: Arc<Semaphore>,
}

impl SpaceXClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SpaceXConfig) -> Result<Self, LaunchDataError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            query_limit: config.query_limit,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Fetch every launch pad known to the API.
    pub async fn fetch_launch_pads(&self) -> Result<Vec<LaunchPad>, LaunchDataError> {
        let _permit = self.acquire().await?;

        let url = format!("{}/launchpads", self.base_url);
        let response = self.http.get(&url).send().await?;
        let body = success_body(response).await?;

        let pads: Vec<LaunchPadDto> = parse_json(&body)?;
        Ok(pads.into_iter().map(LaunchPad::from).collect())
    }

    /// Run a launch query and return the matching documents.
    pub async fn query_launches(
        &self,
        request: &LaunchQueryRequest,
    ) -> Result<Vec<Launch>, LaunchDataError> {
        let _permit = self.acquire().await?;

        let url = format!("{}/launches/query", self.base_url);
        let response = self.http.post(&url).json(request).send().await?;
        let body = success_body(response).await?;

        let response: LaunchQueryResponse = parse_json(&body)?;
        Ok(response.docs.into_iter().map(Launch::from).collect())
    }

    async fn acquire(&self) -> Result<tokio::sync::SemaphorePermit<'_>, LaunchDataError> {
        self.semaphore
            .acquire()
            .await
            .map_err(|_| LaunchDataError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })
    }
}

#[async_trait]
impl LaunchDataSource for SpaceXClient {
    async fn launch_pad(&self, launch_pad_id: &str) -> Result<LaunchPad, LaunchDataError> {
        let pads = self.fetch_launch_pads().await?;
        debug!(count = pads.len(), launch_pad_id, "fetched launch pads");

        pads.into_iter()
            .find(|pad| pad.id == launch_pad_id)
            .ok_or_else(|| LaunchDataError::LaunchPadNotFound {
                id: launch_pad_id.to_string(),
            })
    }

    async fn launches_on(
        &self,
        launch_pad_id: &str,
        date: DateTime<Utc>,
    ) -> Result<Vec<Launch>, LaunchDataError> {
        let request = LaunchQueryRequest::for_day(launch_pad_id, date, self.query_limit);
        let launches = self.query_launches(&request).await?;
        debug!(
            launch_pad_id,
            from = %request.query.date_utc.gte,
            count = launches.len(),
            "queried launches"
        );
        Ok(launches)
    }
}

/// Check the status line and read the body of a successful response.
async fn success_body(response: reqwest::Response) -> Result<String, LaunchDataError> {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(LaunchDataError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(LaunchDataError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, LaunchDataError> {
    serde_json::from_str(body).map_err(|e| LaunchDataError::Json {
        message: format!(
            "{e} (body: {})",
            body.chars().take(BODY_SNIPPET_CHARS).collect::<String>()
        ),
    })
}
