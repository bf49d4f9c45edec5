//! Platform descriptor system.
//!
//! A descriptor contains the static configuration for a platform:
//! - Identity and CLI aliases
//! - Site and API roots, profile URL pattern
//! - Transport kind
//! - Raw fetch entry point

use cpstat_core::{Platform, RawPayload, StatsError};
use cpstat_fetch::{FetchContext, TransportKind};
use futures::future::BoxFuture;

/// Future returned by a descriptor's raw fetch.
pub type RawFuture<'a> = BoxFuture<'a, Result<RawPayload, StatsError>>;

/// Raw fetch entry point using the platform's default adapter.
pub type RawFetchFn = for<'a> fn(&'a FetchContext, &'a str) -> RawFuture<'a>;

// ============================================================================
// Platform Descriptor
// ============================================================================

/// Complete descriptor for a platform.
pub struct PlatformDescriptor {
    /// Platform identifier.
    pub id: Platform,
    /// Extra CLI names besides [`Platform::cli_name`].
    pub aliases: &'static [&'static str],
    /// Public site root.
    pub site_url: &'static str,
    /// Root the adapter talks to by default.
    pub api_base: &'static str,
    /// Profile URL with a `{username}` placeholder.
    pub profile_url_pattern: &'static str,
    /// How data is obtained.
    pub transport: TransportKind,
    /// Fetches the raw payload.
    pub fetch_raw: RawFetchFn,
}

impl PlatformDescriptor {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        self.id.display_name()
    }

    /// Returns the primary CLI name.
    pub fn cli_name(&self) -> &'static str {
        self.id.cli_name()
    }

    /// Returns every name this platform answers to on the command line.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.cli_name())
            .chain(std::iter::once(self.id.key()))
            .chain(self.aliases.iter().copied())
    }

    /// Returns the public profile URL for a user.
    pub fn profile_url(&self, username: &str) -> String {
        self.profile_url_pattern.replace("{username}", username)
    }

    /// Fetches the raw upstream payload for a user.
    pub fn fetch_raw<'a>(&self, ctx: &'a FetchContext, username: &'a str) -> RawFuture<'a> {
        (self.fetch_raw)(ctx, username)
    }
}

impl std::fmt::Debug for PlatformDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformDescriptor")
            .field("id", &self.id)
            .field("aliases", &self.aliases)
            .field("api_base", &self.api_base)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}
