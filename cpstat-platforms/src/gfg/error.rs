//! GeeksforGeeks-specific errors.

use cpstat_core::StatsError;
use cpstat_fetch::FetchError;
use thiserror::Error;

/// GeeksforGeeks-specific errors.
#[derive(Debug, Error)]
pub enum GfgError {
    /// The page says the profile does not exist.
    #[error("User \"{0}\" not found")]
    UserNotFound(String),

    /// The page loaded but carries no embedded user data.
    #[error("Failed to find user data in profile page")]
    MissingUserData,

    /// Transport failure.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl From<GfgError> for StatsError {
    fn from(err: GfgError) -> Self {
        match err {
            GfgError::UserNotFound(name) => StatsError::UserNotFound(name),
            GfgError::MissingUserData => {
                StatsError::Parse("Failed to find user data in profile page".to_string())
            }
            GfgError::Fetch(e) => e.into(),
        }
    }
}
