//! Serde tests for core types.
//!
//! These tests pin the JSON shape consumers rely on: camelCase keys,
//! omitted optional fields, and the `success`/`data`/`error` envelope.

use serde_json::json;

use crate::{
    AllStats, CodeChefStats, CodeforcesStats, GfgStats, LeetCodeStats, Platform, PlatformResult,
    RawPayload, SolvedBreakdown, UserHandles,
};

fn codeforces_fixture() -> CodeforcesStats {
    CodeforcesStats {
        username: "alice".to_string(),
        rating: 1500,
        max_rating: 1600,
        rank: "expert".to_string(),
        max_rank: "expert".to_string(),
        solved: 2,
        contests_count: 4,
        contribution: -3,
        avatar: "https://userpic.codeforces.org/no-avatar.jpg".to_string(),
    }
}

// ============================================================================
// Platform Serde Tests
// ============================================================================

#[test]
fn test_platform_serializes_to_key() {
    for platform in Platform::all() {
        let json = serde_json::to_string(platform).unwrap();
        assert_eq!(json, format!("\"{}\"", platform.key()));
    }
}

#[test]
fn test_platform_invalid_deserialize() {
    let result: Result<Platform, _> = serde_json::from_str(r#""topcoder""#);
    assert!(result.is_err());
}

// ============================================================================
// Record Serde Tests
// ============================================================================

#[test]
fn test_codeforces_stats_camel_case() {
    let value = serde_json::to_value(codeforces_fixture()).unwrap();
    assert_eq!(value["maxRating"], 1600);
    assert_eq!(value["maxRank"], "expert");
    assert_eq!(value["contestsCount"], 4);
    assert_eq!(value["contribution"], -3);
}

#[test]
fn test_leetcode_optional_contest_fields_omitted() {
    let stats = LeetCodeStats {
        username: "neal".to_string(),
        ranking: 42,
        solved: SolvedBreakdown::total_only(3),
        contest_rating: None,
        contest_ranking: None,
        contests_attended: None,
        avatar: String::new(),
    };
    let value = serde_json::to_value(&stats).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("contestRating"));
    assert!(!object.contains_key("contestRanking"));
    assert!(!object.contains_key("contestsAttended"));
    assert_eq!(value["solved"], json!({"total": 3, "easy": 0, "medium": 0, "hard": 0}));
}

#[test]
fn test_codechef_ranks_omitted_when_missing() {
    let stats = CodeChefStats {
        username: "chef".to_string(),
        rating: 1800,
        max_rating: 1900,
        stars: 4,
        solved: 120,
        contests: 30,
        global_rank: Some(1234),
        country_rank: None,
        avatar: String::new(),
    };
    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(value["globalRank"], 1234);
    assert!(value.get("countryRank").is_none());
}

#[test]
fn test_gfg_stats_keys() {
    let stats = GfgStats {
        username: "geek".to_string(),
        coding_score: 900,
        monthly_score: 12,
        solved: SolvedBreakdown::total_only(250),
        current_streak: 3,
        max_streak: 40,
        institute_rank: None,
        avatar: String::new(),
    };
    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(value["codingScore"], 900);
    assert_eq!(value["monthlyScore"], 12);
    assert_eq!(value["currentStreak"], 3);
    assert_eq!(value["maxStreak"], 40);
}

// ============================================================================
// PlatformResult Serde Tests
// ============================================================================

#[test]
fn test_success_envelope() {
    let result = PlatformResult::Success(codeforces_fixture());
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["username"], "alice");
    assert!(value.get("error").is_none());
}

#[test]
fn test_failure_envelope() {
    let result: PlatformResult<CodeforcesStats> =
        PlatformResult::Failure("[Codeforces] HTTP 502: Bad Gateway".to_string());
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({"success": false, "error": "[Codeforces] HTTP 502: Bad Gateway"})
    );
}

#[test]
fn test_envelope_rejects_inconsistent_input() {
    let missing_data: Result<PlatformResult<u32>, _> =
        serde_json::from_str(r#"{"success": true}"#);
    assert!(missing_data.is_err());

    let missing_error: Result<PlatformResult<u32>, _> =
        serde_json::from_str(r#"{"success": false}"#);
    assert!(missing_error.is_err());
}

#[test]
fn test_envelope_deserialize() {
    let ok: PlatformResult<u32> = serde_json::from_str(r#"{"success": true, "data": 7}"#).unwrap();
    assert_eq!(ok, PlatformResult::Success(7));

    let err: PlatformResult<u32> =
        serde_json::from_str(r#"{"success": false, "error": "[GeeksforGeeks] nope"}"#).unwrap();
    assert_eq!(err.error(), Some("[GeeksforGeeks] nope"));
}

// ============================================================================
// AllStats / Handles / Raw Serde Tests
// ============================================================================

#[test]
fn test_all_stats_skips_unrequested_platforms() {
    let stats = AllStats {
        codeforces: Some(PlatformResult::Success(codeforces_fixture())),
        ..Default::default()
    };
    let value = serde_json::to_value(&stats).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("codeforces"));
}

#[test]
fn test_user_handles_from_json() {
    let handles: UserHandles =
        serde_json::from_str(r#"{"codeforces": "tourist", "gfg": "geek"}"#).unwrap();
    assert_eq!(
        handles.requested(),
        vec![Platform::Codeforces, Platform::GeeksforGeeks]
    );
}

#[test]
fn test_raw_payload_tagging() {
    let raw = RawPayload::Html("<html></html>".to_string());
    let value = serde_json::to_value(&raw).unwrap();
    assert_eq!(value, json!({"format": "html", "body": "<html></html>"}));
}
