//! JSON output formatting.

use anyhow::Result;
use chrono::{DateTime, Utc};
use cpstat_core::{AllStats, RawPayload};
use cpstat_platforms::PlatformDescriptor;
use serde::Serialize;

use crate::config::Effective;

// ============================================================================
// Output Types
// ============================================================================

/// Envelope for `cpstat stats --format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOutput<'a> {
    pub fetched_at: DateTime<Utc>,
    pub timeout_ms: u64,
    pub results: &'a AllStats,
}

/// Platform info output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInfoOutput {
    pub id: &'static str,
    pub display_name: &'static str,
    pub cli_name: &'static str,
    pub aliases: Vec<&'static str>,
    pub transport: &'static str,
    pub site_url: &'static str,
    pub profile_url: String,
}

impl From<&PlatformDescriptor> for PlatformInfoOutput {
    fn from(desc: &PlatformDescriptor) -> Self {
        Self {
            id: desc.id.key(),
            display_name: desc.display_name(),
            cli_name: desc.cli_name(),
            aliases: desc.aliases.to_vec(),
            transport: desc.transport.display_name(),
            site_url: desc.site_url,
            profile_url: desc.profile_url_pattern.to_string(),
        }
    }
}

/// Effective configuration output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOutput<'a> {
    pub path: Option<String>,
    pub handles: &'a cpstat_core::UserHandles,
    pub timeout_ms: u64,
}

impl<'a> From<&'a Effective> for ConfigOutput<'a> {
    fn from(effective: &'a Effective) -> Self {
        Self {
            path: effective.path.as_ref().map(|p| p.display().to_string()),
            handles: &effective.handles,
            timeout_ms: effective.timeout_ms,
        }
    }
}

// ============================================================================
// Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }

    /// Formats an aggregation result with its metadata.
    pub fn format_stats(
        &self,
        stats: &AllStats,
        timeout_ms: u64,
        fetched_at: DateTime<Utc>,
    ) -> Result<String> {
        self.format(&StatsOutput {
            fetched_at,
            timeout_ms,
            results: stats,
        })
    }

    /// Formats the supported platform list.
    pub fn format_platforms(&self, descriptors: &[PlatformDescriptor]) -> Result<String> {
        let output: Vec<PlatformInfoOutput> = descriptors.iter().map(Into::into).collect();
        self.format(&output)
    }

    /// Formats a raw payload as its tagged envelope.
    pub fn format_raw(&self, payload: &RawPayload) -> Result<String> {
        self.format(payload)
    }

    /// Formats the effective configuration.
    pub fn format_config(&self, effective: &Effective) -> Result<String> {
        self.format(&ConfigOutput::from(effective))
    }
}
