//! LeetCode adapter.

use async_trait::async_trait;
use cpstat_core::{LeetCodeStats, Platform, RawPayload, StatsError};
use cpstat_fetch::{FetchContext, PlatformAdapter, TransportKind};
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::error::LeetCodeError;
use super::graphql::{self, ContestData, ProfileData};
use super::graphql::{CONTEST_QUERY, LEETCODE_BASE, PROFILE_QUERY};
use super::parser;

/// Fetches LeetCode stats through the GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct LeetCodeAdapter {
    base_url: String,
}

impl LeetCodeAdapter {
    /// Creates an adapter for leetcode.com.
    pub fn new() -> Self {
        Self::with_base_url(LEETCODE_BASE)
    }

    /// Creates an adapter against a different site root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Returns the site root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self, ctx))]
    async fn load_stats(
        &self,
        ctx: &FetchContext,
        username: &str,
    ) -> Result<LeetCodeStats, LeetCodeError> {
        debug!("Fetching LeetCode profile");
        let profile =
            graphql::run_query::<ProfileData>(ctx, &self.base_url, PROFILE_QUERY, username).await?;
        let user = parser::require_user(profile, username)?;

        debug!("Fetching LeetCode contest ranking");
        let contest =
            graphql::run_query::<ContestData>(ctx, &self.base_url, CONTEST_QUERY, username).await?;
        let ranking = parser::contest_ranking(contest)?;

        info!(has_contests = ranking.is_some(), "Fetched LeetCode stats");
        Ok(parser::build_stats(user, ranking))
    }
}

impl Default for LeetCodeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformAdapter for LeetCodeAdapter {
    type Stats = LeetCodeStats;

    fn platform(&self) -> Platform {
        Platform::LeetCode
    }

    fn transport(&self) -> TransportKind {
        TransportKind::GraphQl
    }

    async fn fetch_stats(
        &self,
        ctx: &FetchContext,
        username: &str,
    ) -> Result<LeetCodeStats, StatsError> {
        Ok(self.load_stats(ctx, username).await?)
    }

    async fn fetch_raw(
        &self,
        ctx: &FetchContext,
        username: &str,
    ) -> Result<RawPayload, StatsError> {
        let response = graphql::run_query::<Value>(ctx, &self.base_url, PROFILE_QUERY, username)
            .await
            .map_err(LeetCodeError::from)?;
        let data = parser::require_raw_profile(response, username)?;
        Ok(RawPayload::Json(data))
    }
}
