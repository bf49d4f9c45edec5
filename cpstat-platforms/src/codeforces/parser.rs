//! Codeforces response normalization.

use std::collections::HashSet;

use cpstat_core::{CodeforcesStats, UNRATED};

use super::api::{ApiEnvelope, CodeforcesUser, Submission};
use super::error::CodeforcesError;
use crate::avatar;

/// Verdict of an accepted submission.
const VERDICT_OK: &str = "OK";

/// Separates handles in a `user.info` query.
const HANDLE_SEPARATOR: char = ';';

/// Returns true if `username` is one handle and not a handle list.
pub fn is_single_handle(username: &str) -> bool {
    !username.contains(HANDLE_SEPARATOR)
}

/// Extracts the single user from a `user.info` envelope.
///
/// A failed envelope, an empty result or more than one user means the
/// handle does not name exactly one account.
pub fn require_user(
    envelope: ApiEnvelope<Vec<CodeforcesUser>>,
    username: &str,
) -> Result<CodeforcesUser, CodeforcesError> {
    let not_found = || CodeforcesError::UserNotFound(username.to_string());
    if !envelope.is_ok() {
        return Err(not_found());
    }
    let mut users = envelope.result.unwrap_or_default().into_iter();
    match (users.next(), users.next()) {
        (Some(user), None) => Ok(user),
        _ => Err(not_found()),
    }
}

/// Returns true if a raw `user.info` document names exactly one user.
pub fn raw_user_exists(body: &serde_json::Value) -> bool {
    body.get("status").and_then(|s| s.as_str()) == Some("OK")
        && body
            .get("result")
            .and_then(|r| r.as_array())
            .is_some_and(|users| users.len() == 1)
}

/// Counts distinct problems with at least one accepted submission.
pub fn count_solved(submissions: &[Submission]) -> u32 {
    let solved: HashSet<(Option<i64>, &str)> = submissions
        .iter()
        .filter(|s| s.verdict.as_deref() == Some(VERDICT_OK))
        .map(|s| (s.problem.contest_id, s.problem.index.as_str()))
        .collect();
    u32::try_from(solved.len()).unwrap_or(u32::MAX)
}

/// Solved count from a `user.status` envelope. A failed envelope counts as zero.
pub fn solved_from_envelope(envelope: &ApiEnvelope<Vec<Submission>>) -> u32 {
    match (&envelope.result, envelope.is_ok()) {
        (Some(submissions), true) => count_solved(submissions),
        _ => 0,
    }
}

/// Builds the normalized record.
pub fn build_stats(user: CodeforcesUser, solved: u32, contests_count: u32) -> CodeforcesStats {
    let avatar = user
        .avatar
        .or(user.title_photo)
        .map(|src| avatar::resolve_protocol_relative(&src))
        .unwrap_or_default();

    CodeforcesStats {
        username: user.handle,
        rating: user.rating.unwrap_or(0),
        max_rating: user.max_rating.unwrap_or(0),
        rank: user.rank.unwrap_or_else(|| UNRATED.to_string()),
        max_rank: user.max_rank.unwrap_or_else(|| UNRATED.to_string()),
        solved,
        contests_count,
        contribution: user.contribution.unwrap_or(0),
        avatar,
    }
}
