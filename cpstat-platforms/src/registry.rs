//! Platform registry.
//!
//! The registry provides static access to all platform descriptors and
//! resolves the names users type on the command line.

use cpstat_core::{Platform, PlatformError, RawPayload};
use cpstat_fetch::FetchContext;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::instrument;

use crate::codechef::codechef_descriptor;
use crate::codeforces::codeforces_descriptor;
use crate::descriptor::PlatformDescriptor;
use crate::gfg::gfg_descriptor;
use crate::leetcode::leetcode_descriptor;

// ============================================================================
// Static Registry
// ============================================================================

/// Static storage for all platform descriptors.
static DESCRIPTORS: OnceLock<Vec<PlatformDescriptor>> = OnceLock::new();

/// Static storage for CLI name to platform mapping.
static CLI_NAME_MAP: OnceLock<HashMap<String, Platform>> = OnceLock::new();

/// Descriptors in rendering order.
fn init_descriptors() -> Vec<PlatformDescriptor> {
    vec![
        codeforces_descriptor(),
        leetcode_descriptor(),
        codechef_descriptor(),
        gfg_descriptor(),
    ]
}

fn build_cli_name_map(descriptors: &[PlatformDescriptor]) -> HashMap<String, Platform> {
    descriptors
        .iter()
        .flat_map(|desc| desc.names().map(move |name| (name.to_string(), desc.id)))
        .collect()
}

// ============================================================================
// Platform Registry
// ============================================================================

/// Global registry of platform descriptors.
pub struct PlatformRegistry;

impl PlatformRegistry {
    /// Returns all platform descriptors.
    pub fn all() -> &'static [PlatformDescriptor] {
        DESCRIPTORS.get_or_init(init_descriptors)
    }

    /// Gets a descriptor by platform.
    pub fn get(id: Platform) -> Option<&'static PlatformDescriptor> {
        Self::all().iter().find(|d| d.id == id)
    }

    /// Returns the CLI name to platform mapping.
    pub fn cli_name_map() -> &'static HashMap<String, Platform> {
        CLI_NAME_MAP.get_or_init(|| build_cli_name_map(Self::all()))
    }

    /// Looks up a descriptor by CLI name or alias, case-insensitively.
    pub fn get_by_cli_name(name: &str) -> Option<&'static PlatformDescriptor> {
        let id = Self::resolve(name)?;
        Self::get(id)
    }

    /// Resolves a CLI name or alias to a platform.
    pub fn resolve(name: &str) -> Option<Platform> {
        Self::cli_name_map()
            .get(name.trim().to_ascii_lowercase().as_str())
            .copied()
    }

    /// Returns the number of registered platforms.
    pub fn count() -> usize {
        Self::all().len()
    }

    /// Fetches the raw payload for a user on one platform.
    #[instrument(skip(ctx))]
    pub async fn fetch_raw(
        ctx: &FetchContext,
        platform: Platform,
        username: &str,
    ) -> Result<RawPayload, PlatformError> {
        let wrap = |source| PlatformError::new(platform, source);
        let desc = Self::get(platform).ok_or_else(|| {
            wrap(cpstat_core::StatsError::Parse(format!(
                "No descriptor registered for {platform}"
            )))
        })?;
        desc.fetch_raw(ctx, username).await.map_err(wrap)
    }
}

// ============================================================================
// Tests
// ============================================================================
