//! Optional JSON config file.
//!
//! ```json
//! {
//!   "handles": { "codeforces": "tourist", "leetcode": "neal_wu" },
//!   "timeoutMs": 8000
//! }
//! ```
//!
//! Every key is optional. Command-line flags win over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use cpstat_core::{DEFAULT_TIMEOUT_MS, FetchOptions, UserHandles};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Config file name inside the cpstat config directory.
const CONFIG_FILE: &str = "config.json";

/// Contents of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    /// Default usernames.
    #[serde(default)]
    pub handles: UserHandles,
    /// Default timeout in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl CliConfig {
    /// `<config dir>/cpstat/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cpstat").join(CONFIG_FILE))
    }

    /// Loads from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        if config.timeout_ms == Some(0) {
            bail!("Invalid config file {}: timeoutMs must be at least 1", path.display());
        }

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}

// ============================================================================
// Effective Settings
// ============================================================================

/// Flags merged over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effective {
    /// Config file consulted, if any.
    pub path: Option<PathBuf>,
    /// Usernames to fetch.
    pub handles: UserHandles,
    /// Per-request timeout.
    pub timeout_ms: u64,
}

impl Effective {
    /// Loads the config file and applies the command-line values on top.
    ///
    /// An explicit `--config` path must exist; the default location may not.
    pub fn resolve(
        explicit: Option<&Path>,
        flags: UserHandles,
        timeout_ms: Option<u64>,
    ) -> Result<Self> {
        let (path, config) = match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                (Some(path.to_path_buf()), CliConfig::load_from(path)?)
            }
            None => match CliConfig::default_path() {
                Some(path) => {
                    let config = CliConfig::load_from(&path)?;
                    (Some(path), config)
                }
                None => (None, CliConfig::default()),
            },
        };

        Ok(Self::merge(path, flags, timeout_ms, &config))
    }

    /// Merges flag values over a loaded config.
    pub fn merge(
        path: Option<PathBuf>,
        flags: UserHandles,
        timeout_ms: Option<u64>,
        config: &CliConfig,
    ) -> Self {
        Self {
            path,
            handles: flags.merge_missing(&config.handles),
            timeout_ms: timeout_ms
                .or(config.timeout_ms)
                .unwrap_or(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Fetch options for the library.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions::with_timeout_ms(self.timeout_ms)
    }
}
