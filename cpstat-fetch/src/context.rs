//! Fetch context shared by platform adapters.
//!
//! The context bundles the HTTP client with the per-request settings so
//! every adapter in a run uses the same connection pool and timeout.

use std::sync::Arc;
use std::time::Duration;

use cpstat_core::{DEFAULT_TIMEOUT_MS, FetchOptions};

use crate::client::HttpClient;
use crate::error::FetchError;

// ============================================================================
// Fetch Settings
// ============================================================================

/// Settings for fetch operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSettings {
    /// Deadline applied to each individual request.
    pub timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl FetchSettings {
    /// Creates settings with custom timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<FetchOptions> for FetchSettings {
    fn from(options: FetchOptions) -> Self {
        Self {
            timeout: options.timeout(),
        }
    }
}

// ============================================================================
// Fetch Context
// ============================================================================

/// Context provided to platform adapters.
#[derive(Clone)]
pub struct FetchContext {
    /// Shared HTTP client.
    pub http: Arc<HttpClient>,
    /// Fetch settings.
    pub settings: FetchSettings,
}

impl FetchContext {
    /// Creates a context with default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::builder().build()
    }

    /// Creates a context from caller options.
    pub fn from_options(options: &FetchOptions) -> Result<Self, FetchError> {
        Self::builder().settings((*options).into()).build()
    }

    /// Creates a builder for customizing the context.
    pub fn builder() -> FetchContextBuilder {
        FetchContextBuilder::new()
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.settings.timeout
    }

    /// Returns the per-request timeout in milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.settings.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

impl std::fmt::Debug for FetchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Fetch Context Builder
// ============================================================================

/// Builder for constructing a `FetchContext`.
#[derive(Debug, Default)]
pub struct FetchContextBuilder {
    http: Option<Arc<HttpClient>>,
    settings: FetchSettings,
}

impl FetchContextBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP client.
    pub fn http(mut self, http: Arc<HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    /// Sets the fetch settings.
    pub fn settings(mut self, settings: FetchSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = timeout;
        self
    }

    /// Builds the fetch context, creating a client if none was supplied.
    pub fn build(self) -> Result<FetchContext, FetchError> {
        let http = match self.http {
            Some(http) => http,
            None => Arc::new(HttpClient::new()?),
        };
        Ok(FetchContext {
            http,
            settings: self.settings,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
