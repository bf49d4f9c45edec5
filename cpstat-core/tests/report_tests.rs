//! Integration tests for the aggregated report types.

use cpstat_core::{
    AllStats, GfgStats, Platform, PlatformError, PlatformResult, SolvedBreakdown, StatsError,
};

#[test]
fn test_report_roundtrip_preserves_slots() {
    let gfg = GfgStats {
        username: "geek".to_string(),
        coding_score: 10,
        monthly_score: 0,
        solved: SolvedBreakdown::total_only(5),
        current_streak: 0,
        max_streak: 2,
        institute_rank: Some(9),
        avatar: "https://media.geeksforgeeks.org/img.png".to_string(),
    };
    let failure: PlatformResult<_> = Err(PlatformError::new(
        Platform::CodeChef,
        StatsError::Timeout(100),
    ))
    .into();

    let stats = AllStats {
        gfg: Some(PlatformResult::Success(gfg)),
        codechef: Some(failure),
        ..Default::default()
    };

    let json = serde_json::to_string(&stats).unwrap();
    let parsed: AllStats = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, stats);
    assert_eq!(
        parsed.platforms(),
        vec![Platform::CodeChef, Platform::GeeksforGeeks]
    );
    assert_eq!(
        parsed.error(Platform::CodeChef),
        Some("[CodeChef] Request timeout after 100ms")
    );
}
