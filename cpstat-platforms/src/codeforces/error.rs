//! Codeforces-specific errors.

use cpstat_core::StatsError;
use cpstat_fetch::FetchError;
use thiserror::Error;

/// Codeforces-specific errors.
#[derive(Debug, Error)]
pub enum CodeforcesError {
    /// `user.info` reported a failure or returned no users.
    #[error("User \"{0}\" not found")]
    UserNotFound(String),

    /// Transport or decoding failure.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl From<serde_json::Error> for CodeforcesError {
    fn from(err: serde_json::Error) -> Self {
        CodeforcesError::Fetch(FetchError::Json(err))
    }
}

impl From<CodeforcesError> for StatsError {
    fn from(err: CodeforcesError) -> Self {
        match err {
            CodeforcesError::UserNotFound(name) => StatsError::UserNotFound(name),
            CodeforcesError::Fetch(e) => e.into(),
        }
    }
}
