//! Codeforces adapter.

use async_trait::async_trait;
use cpstat_core::{CodeforcesStats, Platform, RawPayload, StatsError};
use cpstat_fetch::{FetchContext, PlatformAdapter, TransportKind};
use tracing::{debug, info, instrument, warn};

use super::api::{self, CODEFORCES_API_BASE};
use super::error::CodeforcesError;
use super::parser;

// ============================================================================
// Adapter
// ============================================================================

/// Fetches Codeforces stats from the public JSON API.
#[derive(Debug, Clone)]
pub struct CodeforcesAdapter {
    base_url: String,
}

impl CodeforcesAdapter {
    /// Creates an adapter for the public API.
    pub fn new() -> Self {
        Self::with_base_url(CODEFORCES_API_BASE)
    }

    /// Creates an adapter against a different API root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Returns the API root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self, ctx))]
    async fn load_stats(
        &self,
        ctx: &FetchContext,
        username: &str,
    ) -> Result<CodeforcesStats, CodeforcesError> {
        if !parser::is_single_handle(username) {
            return Err(CodeforcesError::UserNotFound(username.to_string()));
        }

        debug!("Fetching Codeforces user info");
        let envelope = api::user_info(ctx, &self.base_url, username).await?;
        let user = parser::require_user(envelope, username)?;

        let (submissions, rating) = tokio::join!(
            api::user_status(ctx, &self.base_url, username),
            api::user_rating(ctx, &self.base_url, username),
        );

        let solved = parser::solved_from_envelope(&submissions?);

        let contests_count = match rating {
            Ok(envelope) if envelope.is_ok() => envelope
                .result
                .map_or(0, |changes| u32::try_from(changes.len()).unwrap_or(u32::MAX)),
            Ok(envelope) => {
                debug!(comment = ?envelope.comment, "Rating history unavailable");
                0
            }
            Err(e) => {
                warn!(error = %e, "Rating history request failed");
                0
            }
        };

        info!(solved, contests_count, "Fetched Codeforces stats");
        Ok(parser::build_stats(user, solved, contests_count))
    }
}

impl Default for CodeforcesAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformAdapter for CodeforcesAdapter {
    type Stats = CodeforcesStats;

    fn platform(&self) -> Platform {
        Platform::Codeforces
    }

    fn transport(&self) -> TransportKind {
        TransportKind::JsonApi
    }

    async fn fetch_stats(
        &self,
        ctx: &FetchContext,
        username: &str,
    ) -> Result<CodeforcesStats, StatsError> {
        Ok(self.load_stats(ctx, username).await?)
    }

    async fn fetch_raw(
        &self,
        ctx: &FetchContext,
        username: &str,
    ) -> Result<RawPayload, StatsError> {
        if !parser::is_single_handle(username) {
            return Err(StatsError::UserNotFound(username.to_string()));
        }

        let body = api::user_info_raw(ctx, &self.base_url, username)
            .await
            .map_err(CodeforcesError::from)?;
        if !parser::raw_user_exists(&body) {
            return Err(StatsError::UserNotFound(username.to_string()));
        }
        Ok(RawPayload::Json(body))
    }
}
