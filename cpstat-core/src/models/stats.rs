//! Normalized per-platform statistics records.
//!
//! Every record is a plain value built once per fetch. Missing upstream
//! numbers are already defaulted to 0 and missing rank strings to
//! `"unrated"` by the time a record exists; fields that may legitimately be
//! absent are `Option` and are skipped when serialized.

use serde::{Deserialize, Serialize};

/// Rank reported by Codeforces for users without rated contests.
pub const UNRATED: &str = "unrated";

// ============================================================================
// Solved Breakdown
// ============================================================================

/// Accepted problem counts by difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedBreakdown {
    /// All difficulties.
    pub total: u32,
    /// Easy problems.
    pub easy: u32,
    /// Medium problems.
    pub medium: u32,
    /// Hard problems.
    pub hard: u32,
}

impl SolvedBreakdown {
    /// Creates a breakdown where only the total is known.
    pub fn total_only(total: u32) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// Short `total (E:x M:y H:z)` label.
    pub fn summary(&self) -> String {
        format!(
            "{} (E:{} M:{} H:{})",
            self.total, self.easy, self.medium, self.hard
        )
    }
}

// ============================================================================
// Codeforces
// ============================================================================

/// Codeforces profile statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeforcesStats {
    /// Handle as spelled by Codeforces.
    pub username: String,
    /// Current rating.
    pub rating: u32,
    /// Peak rating.
    pub max_rating: u32,
    /// Current rank title (e.g. `expert`).
    pub rank: String,
    /// Peak rank title.
    pub max_rank: String,
    /// Distinct problems with an accepted submission.
    pub solved: u32,
    /// Rated contests taken part in.
    pub contests_count: u32,
    /// Community contribution score, may be negative.
    pub contribution: i64,
    /// Absolute avatar URL.
    pub avatar: String,
}

// ============================================================================
// LeetCode
// ============================================================================

/// LeetCode profile statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeStats {
    /// Username as spelled by LeetCode.
    pub username: String,
    /// Global profile ranking.
    pub ranking: u64,
    /// Accepted problems by difficulty.
    pub solved: SolvedBreakdown,
    /// Contest rating, absent if the user never competed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contest_rating: Option<f64>,
    /// Global contest ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contest_ranking: Option<u64>,
    /// Number of contests attended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contests_attended: Option<u32>,
    /// Avatar URL.
    pub avatar: String,
}

// ============================================================================
// CodeChef
// ============================================================================

/// CodeChef profile statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeChefStats {
    /// Requested username.
    pub username: String,
    /// Current rating.
    pub rating: u32,
    /// Highest rating, equal to `rating` when the page does not show one.
    pub max_rating: u32,
    /// Star count (1-7).
    pub stars: u32,
    /// Total problems solved.
    pub solved: u32,
    /// Contests participated in.
    pub contests: u32,
    /// Global rank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_rank: Option<u64>,
    /// Country rank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_rank: Option<u64>,
    /// Absolute avatar URL.
    pub avatar: String,
}

// ============================================================================
// GeeksforGeeks
// ============================================================================

/// GeeksforGeeks profile statistics.
///
/// The profile page only exposes the total solved count; the per-difficulty
/// buckets of [`SolvedBreakdown`] are always zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GfgStats {
    /// Requested username.
    pub username: String,
    /// Overall coding score.
    pub coding_score: u64,
    /// Coding score for the current month.
    pub monthly_score: u64,
    /// Solved problems (total only).
    pub solved: SolvedBreakdown,
    /// Current problem-of-the-day streak.
    pub current_streak: u32,
    /// Longest problem-of-the-day streak.
    pub max_streak: u32,
    /// Rank within the user's institute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institute_rank: Option<u64>,
    /// Absolute avatar URL.
    pub avatar: String,
}
