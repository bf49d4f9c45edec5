//! Platform-related types.
//!
//! - [`Platform`] - Enum of supported judges
//! - [`UserHandles`] - Requested username per platform

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Platform
// ============================================================================

/// Supported competitive programming platforms.
///
/// Declaration order is the order results are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    /// Codeforces (JSON API)
    #[serde(rename = "codeforces")]
    Codeforces,
    /// LeetCode (GraphQL API)
    #[serde(rename = "leetcode")]
    LeetCode,
    /// CodeChef (HTML profile page)
    #[serde(rename = "codechef")]
    CodeChef,
    /// GeeksforGeeks (HTML profile page)
    #[serde(rename = "gfg")]
    GeeksforGeeks,
}

impl Platform {
    /// Returns the display name, also used as the error prefix.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Codeforces => "Codeforces",
            Self::LeetCode => "LeetCode",
            Self::CodeChef => "CodeChef",
            Self::GeeksforGeeks => "GeeksforGeeks",
        }
    }

    /// Returns the short CLI flag name for this platform.
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::Codeforces => "cf",
            Self::LeetCode => "lc",
            Self::CodeChef => "cc",
            Self::GeeksforGeeks => "gfg",
        }
    }

    /// Returns the serialization key (matches the serde representation).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Codeforces => "codeforces",
            Self::LeetCode => "leetcode",
            Self::CodeChef => "codechef",
            Self::GeeksforGeeks => "gfg",
        }
    }

    /// Returns all platforms in rendering order.
    pub fn all() -> &'static [Platform] {
        &[
            Self::Codeforces,
            Self::LeetCode,
            Self::CodeChef,
            Self::GeeksforGeeks,
        ]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// User Handles
// ============================================================================

/// Usernames to look up, at most one per platform.
///
/// A platform without a handle (or with a blank one) is not requested and
/// will not appear in the aggregated result at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserHandles {
    /// Codeforces handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codeforces: Option<String>,
    /// LeetCode username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leetcode: Option<String>,
    /// CodeChef username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codechef: Option<String>,
    /// GeeksforGeeks username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gfg: Option<String>,
}

impl UserHandles {
    /// Creates an empty set of handles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the handle for a platform.
    pub fn with(mut self, platform: Platform, username: impl Into<String>) -> Self {
        self.set(platform, Some(username.into()));
        self
    }

    /// Sets or clears the handle for a platform.
    pub fn set(&mut self, platform: Platform, username: Option<String>) {
        let slot = match platform {
            Platform::Codeforces => &mut self.codeforces,
            Platform::LeetCode => &mut self.leetcode,
            Platform::CodeChef => &mut self.codechef,
            Platform::GeeksforGeeks => &mut self.gfg,
        };
        *slot = username;
    }

    /// Returns the trimmed handle for a platform, if it was requested.
    pub fn get(&self, platform: Platform) -> Option<&str> {
        let slot = match platform {
            Platform::Codeforces => &self.codeforces,
            Platform::LeetCode => &self.leetcode,
            Platform::CodeChef => &self.codechef,
            Platform::GeeksforGeeks => &self.gfg,
        };
        slot.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Returns the requested platforms in rendering order.
    pub fn requested(&self) -> Vec<Platform> {
        Platform::all()
            .iter()
            .copied()
            .filter(|p| self.get(*p).is_some())
            .collect()
    }

    /// Returns true if no platform was requested.
    pub fn is_empty(&self) -> bool {
        self.requested().is_empty()
    }

    /// Fills every unset platform from `other`.
    pub fn merge_missing(mut self, other: &UserHandles) -> Self {
        for platform in Platform::all() {
            if self.get(*platform).is_none() {
                self.set(*platform, other.get(*platform).map(str::to_string));
            }
        }
        self
    }
}
