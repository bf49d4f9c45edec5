//! Platform adapter trait and transport types.
//!
//! An adapter turns a username into one normalized stats record for a
//! single platform. Adapters never panic and never let a failure escape
//! [`PlatformAdapter::fetch`]; every error becomes a platform-prefixed
//! message inside a [`PlatformResult`].

use async_trait::async_trait;
use cpstat_core::{Platform, PlatformError, PlatformResult, RawPayload, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::context::FetchContext;

// ============================================================================
// Transport Kind
// ============================================================================

/// How a platform exposes its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    /// Public JSON REST API.
    JsonApi,
    /// GraphQL endpoint.
    GraphQl,
    /// Server-rendered profile page.
    HtmlScrape,
}

impl TransportKind {
    /// Returns the display name for this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::JsonApi => "JSON API",
            Self::GraphQl => "GraphQL",
            Self::HtmlScrape => "HTML",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Platform Adapter Trait
// ============================================================================

/// Fetches and normalizes statistics for one platform.
///
/// ## Implementing an Adapter
///
/// ```ignore
/// struct ExampleAdapter { base_url: String }
///
/// #[async_trait]
/// impl PlatformAdapter for ExampleAdapter {
///     type Stats = ExampleStats;
///
///     fn platform(&self) -> Platform { Platform::Codeforces }
///     fn transport(&self) -> TransportKind { TransportKind::JsonApi }
///
///     async fn fetch_stats(&self, ctx: &FetchContext, username: &str)
///         -> Result<ExampleStats, StatsError> { ... }
///
///     async fn fetch_raw(&self, ctx: &FetchContext, username: &str)
///         -> Result<RawPayload, StatsError> { ... }
/// }
/// ```
#[async_trait]
pub trait PlatformAdapter: Send + Sync {
    /// Normalized record produced by this adapter.
    type Stats: Send;

    /// The platform this adapter serves.
    fn platform(&self) -> Platform;

    /// The transport this adapter uses.
    fn transport(&self) -> TransportKind;

    /// Fetches and normalizes stats, surfacing typed errors.
    async fn fetch_stats(
        &self,
        ctx: &FetchContext,
        username: &str,
    ) -> Result<Self::Stats, StatsError>;

    /// Fetches the unnormalized upstream payload.
    async fn fetch_raw(&self, ctx: &FetchContext, username: &str)
    -> Result<RawPayload, StatsError>;

    /// Fetches stats and folds any error into a failure result.
    ///
    /// The context timeout bounds the whole fetch, so adapters issuing
    /// several requests still settle within one deadline.
    async fn fetch(&self, ctx: &FetchContext, username: &str) -> PlatformResult<Self::Stats> {
        let platform = self.platform();
        let started = Instant::now();

        let outcome = timeout(ctx.timeout(), self.fetch_stats(ctx, username))
            .await
            .unwrap_or_else(|_| Err(StatsError::Timeout(ctx.timeout_ms())));

        match outcome {
            Ok(stats) => {
                debug!(
                    platform = %platform,
                    username,
                    elapsed_ms = started.elapsed().as_millis(),
                    "Platform fetch succeeded"
                );
                PlatformResult::Success(stats)
            }
            Err(err) => {
                let err = PlatformError::new(platform, err);
                warn!(
                    username,
                    elapsed_ms = started.elapsed().as_millis(),
                    error = %err,
                    "Platform fetch failed"
                );
                PlatformResult::Failure(err.to_string())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
