//! GeeksforGeeks adapter.

use async_trait::async_trait;
use cpstat_core::{GfgStats, Platform, RawPayload, StatsError};
use cpstat_fetch::{FetchContext, PlatformAdapter, TransportKind};
use tracing::{debug, info, instrument};

use super::error::GfgError;
use super::parser;
use crate::page;

/// GeeksforGeeks site root.
pub const GFG_BASE: &str = "https://www.geeksforgeeks.org";

const PROFILE_SECTION: &str = "profile";

/// Scrapes GeeksforGeeks stats from the embedded profile data.
#[derive(Debug, Clone)]
pub struct GfgAdapter {
    base_url: String,
}

impl GfgAdapter {
    /// Creates an adapter for geeksforgeeks.org.
    pub fn new() -> Self {
        Self::with_base_url(GFG_BASE)
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

    async fn load_page(&self, ctx: &FetchContext, username: &str) -> Result<String, GfgError> {
        let url = page::profile_url(&self.base_url, PROFILE_SECTION, username)?;
        page::fetch_page(ctx, &url)
            .await?
            .ok_or_else(|| GfgError::UserNotFound(username.to_string()))
    }

    #[instrument(skip(self, ctx))]
    async fn load_stats(&self, ctx: &FetchContext, username: &str) -> Result<GfgStats, GfgError> {
        debug!("Fetching GeeksforGeeks profile page");
        let html = self.load_page(ctx, username).await?;
        let stats = parser::parse_profile(&html, username, &self.base_url)?;
        info!(
            score = stats.coding_score,
            solved = stats.solved.total,
            "Fetched GeeksforGeeks stats"
        );
        Ok(stats)
    }
}

impl Default for GfgAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformAdapter for GfgAdapter {
    type Stats = GfgStats;

    fn platform(&self) -> Platform {
        Platform::GeeksforGeeks
    }

    fn transport(&self) -> TransportKind {
        TransportKind::HtmlScrape
    }

    async fn fetch_stats(
        &self,
        ctx: &FetchContext,
        username: &str,
    ) -> Result<GfgStats, StatsError> {
        Ok(self.load_stats(ctx, username).await?)
    }

    async fn fetch_raw(
        &self,
        ctx: &FetchContext,
        username: &str,
    ) -> Result<RawPayload, StatsError> {
        let html = self.load_page(ctx, username).await?;
        if !parser::has_user_data(&html) {
            return Err(parser::missing_data_error(&html, username).into());
        }
        Ok(RawPayload::Html(html))
    }
}
