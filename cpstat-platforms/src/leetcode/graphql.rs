//! LeetCode GraphQL client.

use cpstat_fetch::{FetchContext, FetchError, FetchRequest};
use reqwest::header::{HeaderValue, REFERER};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ============================================================================
// Constants
// ============================================================================

/// LeetCode site root. The GraphQL endpoint lives under it.
pub const LEETCODE_BASE: &str = "https://leetcode.com";

const GRAPHQL_PATH: &str = "/graphql/";

/// Profile and solved-count query.
pub const PROFILE_QUERY: &str = r"
query userPublicProfile($username: String!) {
  matchedUser(username: $username) {
    username
    profile {
      realName
      userAvatar
      ranking
    }
    submitStats {
      acSubmissionNum {
        difficulty
        count
      }
    }
  }
}";

/// Contest ranking query.
pub const CONTEST_QUERY: &str = r"
query userContestRankingInfo($username: String!) {
  userContestRanking(username: $username) {
    rating
    globalRanking
    attendedContestsCount
  }
}";

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'static str,
    variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
struct Variables<'a> {
    username: &'a str,
}

/// Top-level GraphQL response.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    /// Query result, absent when the whole query failed.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// `data` of the profile query.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    /// Null when the username does not exist.
    pub matched_user: Option<MatchedUser>,
}

/// A matched user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUser {
    /// Canonical username.
    pub username: String,
    /// Public profile fields.
    #[serde(default)]
    pub profile: UserProfile,
    /// Accepted submission counts.
    #[serde(default)]
    pub submit_stats: SubmitStats,
}

/// Public profile block.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name.
    #[serde(default)]
    pub real_name: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub user_avatar: Option<String>,
    /// Global ranking.
    #[serde(default)]
    pub ranking: Option<u64>,
}

/// Submission statistics block.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStats {
    /// One entry per difficulty, including `All`.
    #[serde(default)]
    pub ac_submission_num: Vec<DifficultyCount>,
}

/// Accepted count for one difficulty.
#[derive(Debug, Deserialize)]
pub struct DifficultyCount {
    /// `All`, `Easy`, `Medium`, or `Hard`.
    pub difficulty: String,
    /// Distinct problems accepted.
    #[serde(default)]
    pub count: u32,
}

/// `data` of the contest query.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestData {
    /// Null for users who never entered a rated contest.
    #[serde(default)]
    pub user_contest_ranking: Option<ContestRanking>,
}

/// Contest ranking block.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestRanking {
    /// Contest rating.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Global contest ranking.
    #[serde(default)]
    pub global_ranking: Option<u64>,
    /// Number of rated contests attended.
    #[serde(default)]
    pub attended_contests_count: Option<u32>,
}

// ============================================================================
// Client
// ============================================================================

/// Runs a query against `<base>/graphql/` and decodes the response.
#[instrument(skip(ctx, query))]
pub async fn run_query<T: DeserializeOwned>(
    ctx: &FetchContext,
    base_url: &str,
    query: &'static str,
    username: &str,
) -> Result<GraphQlResponse<T>, FetchError> {
    let base = base_url.trim_end_matches('/');
    let referer =
        HeaderValue::from_str(base).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

    let request = FetchRequest::post(format!("{base}{GRAPHQL_PATH}"))
        .header(REFERER, referer)
        .json(&GraphQlRequest {
            query,
            variables: Variables { username },
        })?;

    debug!("Posting GraphQL query");
    ctx.http
        .fetch(request, ctx.timeout())
        .await?
        .error_for_status()?
        .json()
}
