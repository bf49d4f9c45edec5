//! Core error types for cpstat.
//!
//! [`StatsError`] is the closed taxonomy every platform adapter maps its
//! failures into. [`PlatformError`] attaches the platform so the message can
//! be shown to a user without further context.

use thiserror::Error;

use crate::models::Platform;

/// Closed set of failure conditions for one platform fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The username does not exist on the platform.
    #[error("User \"{0}\" not found")]
    UserNotFound(String),

    /// No complete response within the configured deadline.
    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {status_text}")]
    Http {
        /// Numeric status code.
        status: u16,
        /// Canonical reason phrase, empty when unknown.
        status_text: String,
    },

    /// Network-level failure (DNS, connect, TLS, body read).
    #[error("{0}")]
    Transport(String),

    /// An expected field or marker could not be located in the response.
    #[error("{0}")]
    Parse(String),
}

impl StatsError {
    /// Returns true if the platform reported that the user does not exist.
    pub fn is_user_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }

    /// Returns true if the request hit its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

/// A [`StatsError`] tagged with the platform it came from.
///
/// Displays as `[Platform] message`, e.g.
/// `[Codeforces] User "nobody" not found`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{}] {source}", .platform.display_name())]
pub struct PlatformError {
    /// Platform the failure belongs to.
    pub platform: Platform,
    /// Underlying condition.
    pub source: StatsError,
}

impl PlatformError {
    /// Creates a new platform error.
    pub fn new(platform: Platform, source: StatsError) -> Self {
        Self { platform, source }
    }
}
