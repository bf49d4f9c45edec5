//! GeeksforGeeks profile page parser.
//!
//! The profile is rendered client-side from a JSON blob embedded in the
//! page. Depending on how it is embedded the keys may appear as `"key":`
//! or `\"key\":`, so every pattern tolerates an optional backslash.

use std::sync::LazyLock;

use cpstat_core::{GfgStats, SolvedBreakdown};
use regex::Regex;

use super::error::GfgError;
use crate::avatar;

/// Served when the profile has no photo.
pub const DEFAULT_AVATAR_PATH: &str = "/img/default-profile.png";

// ============================================================================
// Regex Patterns
// ============================================================================

fn numeric_field(name: &str) -> Regex {
    Regex::new(&format!(r#"\\?"{name}\\?":\s*(\d+)"#)).expect("Invalid regex")
}

/// Marker for the embedded user data object.
static USER_DATA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\\?"userData\\?":"#).expect("Invalid regex"));

static SCORE_RE: LazyLock<Regex> = LazyLock::new(|| numeric_field("score"));
static MONTHLY_SCORE_RE: LazyLock<Regex> = LazyLock::new(|| numeric_field("monthly_score"));
static TOTAL_SOLVED_RE: LazyLock<Regex> =
    LazyLock::new(|| numeric_field("total_problems_solved"));
static INSTITUTE_RANK_RE: LazyLock<Regex> = LazyLock::new(|| numeric_field("institute_rank"));
static MAX_STREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| numeric_field("pod_solved_global_longest_streak"));
static CURRENT_STREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| numeric_field("pod_solved_current_streak"));

/// String value that may contain `\/` escapes.
static AVATAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\\?"profile_image_url\\?":\s*\\?"((?:[^"\\]|\\/)*)\\?""#).expect("Invalid regex")
});

// ============================================================================
// Parsing
// ============================================================================

/// Returns true if the page carries the embedded user data.
pub fn has_user_data(html: &str) -> bool {
    USER_DATA_RE.is_match(html)
}

/// Returns true if the page shows a not-found marker.
pub fn has_not_found_marker(html: &str) -> bool {
    html.contains("404") || html.contains("User not found")
}

/// Classifies a page without user data.
pub fn missing_data_error(html: &str, username: &str) -> GfgError {
    if has_not_found_marker(html) {
        GfgError::UserNotFound(username.to_string())
    } else {
        GfgError::MissingUserData
    }
}

/// Parses a profile page into stats.
pub fn parse_profile(html: &str, username: &str, base_url: &str) -> Result<GfgStats, GfgError> {
    if !has_user_data(html) {
        return Err(missing_data_error(html, username));
    }

    let avatar_src = AVATAR_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace('\\', ""))
        .unwrap_or_default();
    let avatar = avatar::or_default(
        avatar::resolve_protocol_relative(&avatar_src),
        base_url,
        DEFAULT_AVATAR_PATH,
    );

    Ok(GfgStats {
        username: username.to_string(),
        coding_score: capture(&SCORE_RE, html).unwrap_or(0),
        monthly_score: capture(&MONTHLY_SCORE_RE, html).unwrap_or(0),
        // Only the total is present in the server-rendered page.
        solved: SolvedBreakdown::total_only(capture(&TOTAL_SOLVED_RE, html).unwrap_or(0)),
        current_streak: capture(&CURRENT_STREAK_RE, html).unwrap_or(0),
        max_streak: capture(&MAX_STREAK_RE, html).unwrap_or(0),
        institute_rank: capture(&INSTITUTE_RANK_RE, html),
        avatar,
    })
}

fn capture<T: std::str::FromStr>(pattern: &Regex, html: &str) -> Option<T> {
    pattern.captures(html)?.get(1)?.as_str().parse().ok()
}
