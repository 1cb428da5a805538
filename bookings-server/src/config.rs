//! Server configuration.
//!
//! Loaded from environment variables, with defaults for everything.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::spacex::SpaceXConfig;

/// Default HTTP port.
const DEFAULT_PORT: u16 = 8080;

/// Errors from loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but did not parse
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: IpAddr,
    /// HTTP port
    pub port: u16,
    /// Upstream launch schedule client
    pub spacex: SpaceXConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            spacex: SpaceXConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// # Environment Variables
    /// - `BIND_ADDR` - Listen address (default: 0.0.0.0)
    /// - `REST_PORT` - HTTP port (default: 8080)
    /// - `SPACEX_BASE_URL` - Launch schedule API (default: public v4 API)
    /// - `SPACEX_TIMEOUT_SECS` - Upstream request timeout (default: 30)
    /// - `SPACEX_MAX_CONCURRENT` - Concurrent upstream requests (default: 5)
    /// - `SPACEX_QUERY_LIMIT` - Launches requested per day query (default: 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset and empty variables fall back to the default; set but
    /// unparseable ones are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let base = defaults.spacex;

        let timeout_secs = parsed(&lookup, "SPACEX_TIMEOUT_SECS", base.timeout_secs)?;
        let max_concurrent = parsed(&lookup, "SPACEX_MAX_CONCURRENT", base.max_concurrent)?;
        let query_limit = parsed(&lookup, "SPACEX_QUERY_LIMIT", base.query_limit)?;
        if max_concurrent == 0 {
            return Err(ConfigError::Invalid {
                key: "SPACEX_MAX_CONCURRENT",
                value: "0".to_string(),
            });
        }
        let mut spacex = base
            .with_timeout(timeout_secs)
            .with_max_concurrent(max_concurrent)
            .with_query_limit(query_limit);
        if let Some(url) = lookup("SPACEX_BASE_URL").filter(|v| !v.is_empty()) {
            spacex = spacex.with_base_url(url);
        }

        Ok(Self {
            bind_addr: parsed(&lookup, "BIND_ADDR", defaults.bind_addr)?,
            port: parsed(&lookup, "REST_PORT", defaults.port)?,
            spacex,
        })
    }

    /// Socket address to listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parsed<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
