//! CodeChef-specific errors.

use cpstat_core::StatsError;
use cpstat_fetch::FetchError;
use thiserror::Error;

/// CodeChef-specific errors.
#[derive(Debug, Error)]
pub enum CodeChefError {
    /// The profile page is a 404 page.
    #[error("User \"{0}\" not found")]
    UserNotFound(String),

    /// Transport failure.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl From<CodeChefError> for StatsError {
    fn from(err: CodeChefError) -> Self {
        match err {
            CodeChefError::UserNotFound(name) => StatsError::UserNotFound(name),
            CodeChefError::Fetch(e) => e.into(),
        }
    }
}
