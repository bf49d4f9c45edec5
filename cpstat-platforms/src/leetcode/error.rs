//! LeetCode-specific errors.

use cpstat_core::StatsError;
use cpstat_fetch::FetchError;
use thiserror::Error;

/// LeetCode-specific errors.
#[derive(Debug, Error)]
pub enum LeetCodeError {
    /// `matchedUser` came back null.
    #[error("User \"{0}\" not found")]
    UserNotFound(String),

    /// The GraphQL response had no `data` object.
    #[error("Missing data in {0} response")]
    MissingData(&'static str),

    /// Transport or decoding failure.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl From<LeetCodeError> for StatsError {
    fn from(err: LeetCodeError) -> Self {
        match err {
            LeetCodeError::UserNotFound(name) => StatsError::UserNotFound(name),
            LeetCodeError::MissingData(what) => {
                StatsError::Parse(format!("Missing data in {what} response"))
            }
            LeetCodeError::Fetch(e) => e.into(),
        }
    }
}
