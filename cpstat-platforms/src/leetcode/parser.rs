//! LeetCode response normalization.

use std::collections::HashMap;

use cpstat_core::{LeetCodeStats, SolvedBreakdown};
use serde_json::Value;

use super::error::LeetCodeError;
use super::graphql::{
    ContestData, ContestRanking, DifficultyCount, GraphQlResponse, MatchedUser, ProfileData,
};
use crate::avatar;

/// Extracts the matched user from a profile response.
pub fn require_user(
    response: GraphQlResponse<ProfileData>,
    username: &str,
) -> Result<MatchedUser, LeetCodeError> {
    response
        .data
        .ok_or(LeetCodeError::MissingData("profile"))?
        .matched_user
        .ok_or_else(|| LeetCodeError::UserNotFound(username.to_string()))
}

/// Extracts the contest ranking, which may legitimately be null.
pub fn contest_ranking(
    response: GraphQlResponse<ContestData>,
) -> Result<Option<ContestRanking>, LeetCodeError> {
    Ok(response
        .data
        .ok_or(LeetCodeError::MissingData("contest"))?
        .user_contest_ranking)
}

/// Checks an untyped profile response and returns its `data` object.
pub fn require_raw_profile(
    response: GraphQlResponse<Value>,
    username: &str,
) -> Result<Value, LeetCodeError> {
    let data = response
        .data
        .filter(|d| !d.is_null())
        .ok_or(LeetCodeError::MissingData("profile"))?;
    if data.get("matchedUser").is_none_or(Value::is_null) {
        return Err(LeetCodeError::UserNotFound(username.to_string()));
    }
    Ok(data)
}

/// Folds per-difficulty pairs into a breakdown. Missing difficulties are 0.
pub fn solved_breakdown(counts: &[DifficultyCount]) -> SolvedBreakdown {
    let by_difficulty: HashMap<&str, u32> = counts
        .iter()
        .map(|c| (c.difficulty.as_str(), c.count))
        .collect();
    let get = |key: &str| by_difficulty.get(key).copied().unwrap_or(0);

    SolvedBreakdown {
        total: get("All"),
        easy: get("Easy"),
        medium: get("Medium"),
        hard: get("Hard"),
    }
}

/// Builds the normalized record.
pub fn build_stats(user: MatchedUser, contest: Option<ContestRanking>) -> LeetCodeStats {
    let solved = solved_breakdown(&user.submit_stats.ac_submission_num);
    let avatar = user
        .profile
        .user_avatar
        .as_deref()
        .map(avatar::resolve_protocol_relative)
        .unwrap_or_default();

    LeetCodeStats {
        username: user.username,
        ranking: user.profile.ranking.unwrap_or(0),
        solved,
        contest_rating: contest.as_ref().and_then(|c| c.rating),
        contest_ranking: contest.as_ref().and_then(|c| c.global_ranking),
        contests_attended: contest.as_ref().and_then(|c| c.attended_contests_count),
        avatar,
    }
}
