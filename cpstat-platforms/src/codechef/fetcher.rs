//! CodeChef adapter.

use async_trait::async_trait;
use cpstat_core::{CodeChefStats, Platform, RawPayload, StatsError};
use cpstat_fetch::{FetchContext, PlatformAdapter, TransportKind};
use tracing::{debug, info, instrument};

use super::error::CodeChefError;
use super::parser;
use crate::page;

/// CodeChef site root.
pub const CODECHEF_BASE: &str = "https://www.codechef.com";

const PROFILE_SECTION: &str = "users";

/// Scrapes CodeChef stats from the public profile page.
#[derive(Debug, Clone)]
pub struct CodeChefAdapter {
    base_url: String,
}

impl CodeChefAdapter {
    /// Creates an adapter for codechef.com.
    pub fn new() -> Self {
        Self::with_base_url(CODECHEF_BASE)
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

    async fn load_page(&self, ctx: &FetchContext, username: &str) -> Result<String, CodeChefError> {
        let url = page::profile_url(&self.base_url, PROFILE_SECTION, username)?;
        page::fetch_page(ctx, &url)
            .await?
            .ok_or_else(|| CodeChefError::UserNotFound(username.to_string()))
    }

    #[instrument(skip(self, ctx))]
    async fn load_stats(
        &self,
        ctx: &FetchContext,
        username: &str,
    ) -> Result<CodeChefStats, CodeChefError> {
        debug!("Fetching CodeChef profile page");
        let html = self.load_page(ctx, username).await?;
        let stats = parser::parse_profile(&html, username, &self.base_url)?;
        info!(rating = stats.rating, solved = stats.solved, "Fetched CodeChef stats");
        Ok(stats)
    }
}

impl Default for CodeChefAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformAdapter for CodeChefAdapter {
    type Stats = CodeChefStats;

    fn platform(&self) -> Platform {
        Platform::CodeChef
    }

    fn transport(&self) -> TransportKind {
        TransportKind::HtmlScrape
    }

    async fn fetch_stats(
        &self,
        ctx: &FetchContext,
        username: &str,
    ) -> Result<CodeChefStats, StatsError> {
        Ok(self.load_stats(ctx, username).await?)
    }

    async fn fetch_raw(
        &self,
        ctx: &FetchContext,
        username: &str,
    ) -> Result<RawPayload, StatsError> {
        let html = self.load_page(ctx, username).await?;
        if parser::page_is_not_found(&html, username) {
            return Err(StatsError::UserNotFound(username.to_string()));
        }
        Ok(RawPayload::Html(html))
    }
}
