//! Concurrent multi-platform aggregation.
//!
//! Every requested platform runs as one branch of a single `tokio::join!`.
//! A branch always settles with a [`PlatformResult`], so one platform's
//! failure or timeout never affects the others.

use cpstat_core::{AllStats, FetchOptions, Platform, PlatformResult, UserHandles};
use cpstat_fetch::{FetchContext, FetchError, PlatformAdapter};
use tracing::{debug, info, instrument};

use crate::codechef::CodeChefAdapter;
use crate::codeforces::CodeforcesAdapter;
use crate::gfg::GfgAdapter;
use crate::leetcode::LeetCodeAdapter;

/// Fetches stats for every requested platform with the default adapters.
///
/// The outer `Result` only reports setup faults such as an HTTP client
/// that cannot be built. Per-platform failures live inside [`AllStats`].
pub async fn get_all_stats(
    handles: &UserHandles,
    options: &FetchOptions,
) -> Result<AllStats, FetchError> {
    StatsAggregator::new().get_all_stats(handles, options).await
}

// ============================================================================
// Aggregator
// ============================================================================

/// Holds one adapter per platform. Individual adapters can be replaced,
/// e.g. to point one platform at a different server.
#[derive(Debug, Clone, Default)]
pub struct StatsAggregator {
    codeforces: CodeforcesAdapter,
    leetcode: LeetCodeAdapter,
    codechef: CodeChefAdapter,
    gfg: GfgAdapter,
}

impl StatsAggregator {
    /// Creates an aggregator with the default adapters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the Codeforces adapter.
    pub fn with_codeforces(mut self, adapter: CodeforcesAdapter) -> Self {
        self.codeforces = adapter;
        self
    }

    /// Replaces the LeetCode adapter.
    pub fn with_leetcode(mut self, adapter: LeetCodeAdapter) -> Self {
        self.leetcode = adapter;
        self
    }

    /// Replaces the CodeChef adapter.
    pub fn with_codechef(mut self, adapter: CodeChefAdapter) -> Self {
        self.codechef = adapter;
        self
    }

    /// Replaces the GeeksforGeeks adapter.
    pub fn with_gfg(mut self, adapter: GfgAdapter) -> Self {
        self.gfg = adapter;
        self
    }

    /// Builds a context from `options` and fetches everything requested.
    pub async fn get_all_stats(
        &self,
        handles: &UserHandles,
        options: &FetchOptions,
    ) -> Result<AllStats, FetchError> {
        let ctx = FetchContext::from_options(options)?;
        Ok(self.fetch_all(&ctx, handles).await)
    }

    /// Fetches every requested platform concurrently.
    ///
    /// Completes once every branch has settled. Unrequested platforms have
    /// no slot in the result.
    #[instrument(skip_all, fields(platforms = ?handles.requested(), timeout_ms = ctx.timeout_ms()))]
    pub async fn fetch_all(&self, ctx: &FetchContext, handles: &UserHandles) -> AllStats {
        debug!("Starting aggregation");

        let (codeforces, leetcode, codechef, gfg) = tokio::join!(
            run(&self.codeforces, ctx, handles.get(Platform::Codeforces)),
            run(&self.leetcode, ctx, handles.get(Platform::LeetCode)),
            run(&self.codechef, ctx, handles.get(Platform::CodeChef)),
            run(&self.gfg, ctx, handles.get(Platform::GeeksforGeeks)),
        );

        let stats = AllStats {
            codeforces,
            leetcode,
            codechef,
            gfg,
        };
        info!(
            requested = stats.len(),
            failed = stats.failures().len(),
            "Aggregation complete"
        );
        stats
    }
}

async fn run<A: PlatformAdapter>(
    adapter: &A,
    ctx: &FetchContext,
    username: Option<&str>,
) -> Option<PlatformResult<A::Stats>> {
    match username {
        Some(name) => Some(adapter.fetch(ctx, name).await),
        None => None,
    }
}
