//! Fetch error types.

use cpstat_core::StatsError;
use thiserror::Error;

// ============================================================================
// Main Fetch Error
// ============================================================================

/// Error type for fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No complete response before the deadline.
    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    /// Response status outside the 2xx range.
    #[error("HTTP {status}: {status_text}")]
    Status {
        /// Numeric status code.
        status: u16,
        /// Canonical reason phrase.
        status_text: String,
    },

    /// Transport failure reported by reqwest.
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// Body was not the expected JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The underlying client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl FetchError {
    /// Returns the HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        FetchError::InvalidUrl(err.to_string())
    }
}

impl From<FetchError> for StatsError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Timeout(ms) => StatsError::Timeout(ms),
            FetchError::Status {
                status,
                status_text,
            } => StatsError::Http {
                status,
                status_text,
            },
            FetchError::Json(e) => StatsError::Parse(format!("Invalid JSON: {e}")),
            other => StatsError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_maps_to_stats_timeout() {
        let err: StatsError = FetchError::Timeout(1500).into();
        assert_eq!(err, StatsError::Timeout(1500));
        assert_eq!(err.to_string(), "Request timeout after 1500ms");
    }

    #[test]
    fn test_status_maps_to_http() {
        let err = FetchError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "HTTP 404: Not Found");

        let stats: StatsError = err.into();
        assert!(matches!(stats, StatsError::Http { status: 404, .. }));
    }

    #[test]
    fn test_json_maps_to_parse() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let stats: StatsError = FetchError::from(json_err).into();
        assert!(matches!(stats, StatsError::Parse(_)));
    }

    #[test]
    fn test_url_error_maps_to_transport() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let stats: StatsError = FetchError::from(url_err).into();
        assert!(matches!(stats, StatsError::Transport(msg) if msg.starts_with("Invalid URL")));
    }
}
