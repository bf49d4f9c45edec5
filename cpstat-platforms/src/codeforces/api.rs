//! Codeforces public API client.
//!
//! Every method answers with a `{status, comment?, result?}` envelope.
//! Failures such as an unknown handle come back as HTTP 400 with
//! `status: "FAILED"`, so 400 bodies are decoded instead of rejected.

use cpstat_fetch::{FetchContext, FetchError, FetchRequest};
use reqwest::StatusCode;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

// ============================================================================
// Constants
// ============================================================================

/// Codeforces API base URL.
pub const CODEFORCES_API_BASE: &str = "https://codeforces.com/api";

const USER_INFO: &str = "user.info";
const USER_STATUS: &str = "user.status";
const USER_RATING: &str = "user.rating";

/// Envelope status for a successful call.
const STATUS_OK: &str = "OK";

// ============================================================================
// API Response Types
// ============================================================================

/// Common response envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiEnvelope<T> {
    /// `OK` or `FAILED`.
    pub status: String,
    /// Failure reason.
    #[serde(default)]
    pub comment: Option<String>,
    /// Payload, absent on failure.
    #[serde(default = "Option::default")]
    pub result: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Returns true if the call succeeded.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// A user record from `user.info`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeforcesUser {
    /// Canonical handle.
    pub handle: String,
    /// Current rating, absent for unrated users.
    #[serde(default)]
    pub rating: Option<u32>,
    /// Best rating.
    #[serde(default)]
    pub max_rating: Option<u32>,
    /// Current rank title.
    #[serde(default)]
    pub rank: Option<String>,
    /// Best rank title.
    #[serde(default)]
    pub max_rank: Option<String>,
    /// Contribution score.
    #[serde(default)]
    pub contribution: Option<i64>,
    /// Small avatar URL, often protocol-relative.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Large profile photo URL.
    #[serde(default)]
    pub title_photo: Option<String>,
}

/// A submission from `user.status`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Submission {
    /// The problem submitted to.
    pub problem: Problem,
    /// Judge verdict, absent while testing.
    #[serde(default)]
    pub verdict: Option<String>,
}

/// Problem identity within a submission.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Contest id, absent for some problemset entries.
    #[serde(default)]
    pub contest_id: Option<i64>,
    /// Problem letter within the contest.
    #[serde(default)]
    pub index: String,
}

// ============================================================================
// API Calls
// ============================================================================

/// Builds `<base>/<method>?<param>=<value>` with the value query-encoded.
pub fn endpoint(base: &str, method: &str, param: &str, value: &str) -> Result<Url, FetchError> {
    let mut url = Url::parse(&format!("{}/{method}", base.trim_end_matches('/')))?;
    url.query_pairs_mut().append_pair(param, value);
    Ok(url)
}

/// Calls an API method and returns the decoded body.
#[instrument(skip_all, fields(url = %url))]
async fn call(ctx: &FetchContext, url: Url) -> Result<Value, FetchError> {
    let response = ctx
        .http
        .fetch(FetchRequest::get(url.as_str()), ctx.timeout())
        .await?;

    if response.status() == StatusCode::BAD_REQUEST {
        if let Ok(body) = response.json::<Value>() {
            debug!("Decoded failure envelope from HTTP 400");
            return Ok(body);
        }
    }

    response.error_for_status()?.json()
}

async fn call_typed<T: DeserializeOwned>(
    ctx: &FetchContext,
    url: Url,
) -> Result<ApiEnvelope<T>, FetchError> {
    let body = call(ctx, url).await?;
    Ok(serde_json::from_value(body)?)
}

/// `user.info` as an untyped document.
pub async fn user_info_raw(
    ctx: &FetchContext,
    base_url: &str,
    handle: &str,
) -> Result<Value, FetchError> {
    call(ctx, endpoint(base_url, USER_INFO, "handles", handle)?).await
}

/// `user.info` for a single handle.
pub async fn user_info(
    ctx: &FetchContext,
    base_url: &str,
    handle: &str,
) -> Result<ApiEnvelope<Vec<CodeforcesUser>>, FetchError> {
    call_typed(ctx, endpoint(base_url, USER_INFO, "handles", handle)?).await
}

/// `user.status`, the full submission history.
pub async fn user_status(
    ctx: &FetchContext,
    base_url: &str,
    handle: &str,
) -> Result<ApiEnvelope<Vec<Submission>>, FetchError> {
    call_typed(ctx, endpoint(base_url, USER_STATUS, "handle", handle)?).await
}

/// `user.rating`. Only the number of entries is used.
pub async fn user_rating(
    ctx: &FetchContext,
    base_url: &str,
    handle: &str,
) -> Result<ApiEnvelope<Vec<IgnoredAny>>, FetchError> {
    call_typed(ctx, endpoint(base_url, USER_RATING, "handle", handle)?).await
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_handle() {
        let url = endpoint("https://codeforces.com/api/", USER_INFO, "handles", "a b&c").unwrap();
        assert_eq!(
            url.as_str(),
            "https://codeforces.com/api/user.info?handles=a+b%26c"
        );
    }

    #[test]
    fn test_failed_envelope_without_result() {
        let json = r#"{"status":"FAILED","comment":"handles: User with handle x not found"}"#;
        let envelope: ApiEnvelope<Vec<CodeforcesUser>> = serde_json::from_str(json).unwrap();
        assert!(!envelope.is_ok());
        assert!(envelope.result.is_none());
        assert!(envelope.comment.unwrap().contains("not found"));
    }

    #[test]
    fn test_user_optional_fields() {
        let json = r#"{"handle":"newbie","avatar":"//userpic.codeforces.org/no-avatar.jpg"}"#;
        let user: CodeforcesUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.handle, "newbie");
        assert!(user.rating.is_none());
        assert!(user.rank.is_none());
    }
}
