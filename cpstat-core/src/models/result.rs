//! Per-platform outcomes and the aggregated report.
//!
//! - [`PlatformResult`] - Success record or display-ready error message
//! - [`AllStats`] - One optional slot per platform
//! - [`RawPayload`] - Unnormalized upstream data

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::platform::Platform;
use super::stats::{CodeChefStats, CodeforcesStats, GfgStats, LeetCodeStats};
use crate::error::PlatformError;

// ============================================================================
// Platform Result
// ============================================================================

/// Outcome of fetching one platform.
///
/// Serializes as `{"success": true, "data": ...}` or
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformResult<T> {
    /// The normalized record.
    Success(T),
    /// Platform-prefixed, human-readable error message.
    Failure(String),
}

impl<T> PlatformResult<T> {
    /// Returns true for the success variant.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the record on success.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Returns the error message on failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Result<T, PlatformError>> for PlatformResult<T> {
    fn from(result: Result<T, PlatformError>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Failure(err.to_string()),
        }
    }
}

impl<T: Serialize> Serialize for PlatformResult<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("PlatformResult", 2)?;
        match self {
            Self::Success(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Self::Failure(error) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

#[derive(Deserialize)]
struct PlatformResultRepr<T> {
    success: bool,
    #[serde(default = "Option::default")]
    data: Option<T>,
    #[serde(default)]
    error: Option<String>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PlatformResult<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = PlatformResultRepr::<T>::deserialize(deserializer)?;
        match (repr.success, repr.data, repr.error) {
            (true, Some(data), _) => Ok(Self::Success(data)),
            (false, _, Some(error)) => Ok(Self::Failure(error)),
            (true, None, _) => Err(D::Error::custom("successful result without data")),
            (false, _, None) => Err(D::Error::custom("failed result without error")),
        }
    }
}

// ============================================================================
// All Stats
// ============================================================================

/// Aggregated report. Only requested platforms have a slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllStats {
    /// Codeforces outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codeforces: Option<PlatformResult<CodeforcesStats>>,
    /// LeetCode outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leetcode: Option<PlatformResult<LeetCodeStats>>,
    /// CodeChef outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codechef: Option<PlatformResult<CodeChefStats>>,
    /// GeeksforGeeks outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gfg: Option<PlatformResult<GfgStats>>,
}

impl AllStats {
    /// Returns true if the platform has a slot in this report.
    pub fn contains(&self, platform: Platform) -> bool {
        self.is_success(platform).is_some()
    }

    /// Returns whether the platform succeeded, or `None` if it was not requested.
    pub fn is_success(&self, platform: Platform) -> Option<bool> {
        match platform {
            Platform::Codeforces => self.codeforces.as_ref().map(PlatformResult::is_success),
            Platform::LeetCode => self.leetcode.as_ref().map(PlatformResult::is_success),
            Platform::CodeChef => self.codechef.as_ref().map(PlatformResult::is_success),
            Platform::GeeksforGeeks => self.gfg.as_ref().map(PlatformResult::is_success),
        }
    }

    /// Returns the error message for a failed platform.
    pub fn error(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Codeforces => self.codeforces.as_ref().and_then(PlatformResult::error),
            Platform::LeetCode => self.leetcode.as_ref().and_then(PlatformResult::error),
            Platform::CodeChef => self.codechef.as_ref().and_then(PlatformResult::error),
            Platform::GeeksforGeeks => self.gfg.as_ref().and_then(PlatformResult::error),
        }
    }

    /// Returns the platforms present in this report, in rendering order.
    pub fn platforms(&self) -> Vec<Platform> {
        Platform::all()
            .iter()
            .copied()
            .filter(|p| self.contains(*p))
            .collect()
    }

    /// Returns the failed platforms with their messages.
    pub fn failures(&self) -> Vec<(Platform, &str)> {
        Platform::all()
            .iter()
            .filter_map(|p| self.error(*p).map(|e| (*p, e)))
            .collect()
    }

    /// Number of platforms in this report.
    pub fn len(&self) -> usize {
        self.platforms().len()
    }

    /// Returns true if nothing was requested.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Raw Payload
// ============================================================================

/// Unnormalized upstream payload for one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", content = "body", rename_all = "lowercase")]
pub enum RawPayload {
    /// Decoded JSON document (API platforms).
    Json(serde_json::Value),
    /// Profile page markup (scraped platforms).
    Html(String),
}

impl RawPayload {
    /// Renders the payload for printing.
    pub fn to_pretty_string(&self) -> String {
        match self {
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Self::Html(html) => html.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;

    #[test]
    fn test_from_platform_error() {
        let result: PlatformResult<u32> = Err(PlatformError::new(
            Platform::CodeChef,
            StatsError::UserNotFound("ghost".to_string()),
        ))
        .into();
        assert_eq!(result.error(), Some(r#"[CodeChef] User "ghost" not found"#));
        assert!(result.data().is_none());
    }

    #[test]
    fn test_all_stats_slots() {
        let stats = AllStats {
            leetcode: Some(PlatformResult::Failure("[LeetCode] boom".to_string())),
            ..Default::default()
        };

        assert!(!stats.contains(Platform::Codeforces));
        assert_eq!(stats.is_success(Platform::LeetCode), Some(false));
        assert_eq!(stats.platforms(), vec![Platform::LeetCode]);
        assert_eq!(stats.failures(), vec![(Platform::LeetCode, "[LeetCode] boom")]);
        assert_eq!(stats.len(), 1);
        assert!(AllStats::default().is_empty());
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Handle {
        name: String,
    }

    #[test]
    fn test_failure_roundtrip_without_default_data() {
        let failure: PlatformResult<Handle> =
            PlatformResult::Failure("[LeetCode] Request timeout after 50ms".to_string());
        let json = serde_json::to_string(&failure).unwrap();
        assert_eq!(
            json,
            r#"{"success":false,"error":"[LeetCode] Request timeout after 50ms"}"#
        );

        let back: PlatformResult<Handle> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, failure);

        let ok: PlatformResult<Handle> =
            serde_json::from_str(r#"{"success":true,"data":{"name":"neal"}}"#).unwrap();
        assert_eq!(ok.data().map(|h| h.name.as_str()), Some("neal"));
    }
}
