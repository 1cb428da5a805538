//! Launch data error types.

/// Errors that can occur when fetching launch schedule data.
#[derive(Debug, thiserror::Error)]
pub enum LaunchDataError {
    /// HTTP request failed (connection refused, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the API
    #[error("rate limited by SpaceX API")]
    RateLimited,

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// No launch pad carries the requested identifier
    #[error("launch pad not found: {id}")]
    LaunchPadNotFound { id: String },

    /// A lookup through the launch data cache failed upstream
    #[error("{context}: {source}")]
    Cached {
        context: &'static str,
        #[source]
        source: Box<LaunchDataError>,
    },
}

impl LaunchDataError {
    /// Whether the error means the launch pad does not exist, as opposed to
    /// the provider being unreachable or misbehaving.
    pub fn is_not_found(&self) -> bool {
        match self {
            LaunchDataError::LaunchPadNotFound { .. } => true,
            LaunchDataError::Cached { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// Wrap an error with the operation that failed.
    pub fn context(self, context: &'static str) -> Self {
        LaunchDataError::Cached {
            context,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LaunchDataError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = LaunchDataError::LaunchPadNotFound {
            id: "invalid".into(),
        };
        assert_eq!(err.to_string(), "launch pad not found: invalid");

        let err = LaunchDataError::Json {
            message: "expected value".into(),
        };
        assert!(err.to_string().contains("JSON parse error"));
    }

    #[test]
    fn only_missing_pad_is_not_found() {
        assert!(LaunchDataError::LaunchPadNotFound { id: "x".into() }.is_not_found());
        assert!(!LaunchDataError::RateLimited.is_not_found());
        assert!(
            !LaunchDataError::Api {
                status: 404,
                message: String::new()
            }
            .is_not_found()
        );
    }

    #[test]
    fn context_wraps_message_and_keeps_not_found() {
        let err = LaunchDataError::LaunchPadNotFound {
            id: "invalid".into(),
        }
        .context("unable to get launch pad");
        assert_eq!(
            err.to_string(),
            "unable to get launch pad: launch pad not found: invalid"
        );
        assert!(err.is_not_found());

        let err = LaunchDataError::RateLimited.context("unable to get launches");
        assert!(!err.is_not_found());
        assert!(std::error::Error::source(&err).is_some());
    }
}
