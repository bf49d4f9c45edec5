//! Parser edge case and error handling tests.
//!
//! These tests verify parser behavior with malformed, partial, or edge case inputs.

#[cfg(test)]
mod codeforces_parser_edge_tests {
    use crate::codeforces::api::{ApiEnvelope, CodeforcesUser, Submission};
    use crate::codeforces::parser::{build_stats, count_solved, require_user, solved_from_envelope};

    // ========================================================================
    // Envelope Edge Cases
    // ========================================================================

    #[test]
    fn test_ok_envelope_without_result_is_not_found() {
        let envelope: ApiEnvelope<Vec<CodeforcesUser>> =
            serde_json::from_str(r#"{"status": "OK"}"#).unwrap();
        assert!(require_user(envelope, "x").is_err());
    }

    #[test]
    fn test_failed_envelope_with_result_is_not_found() {
        let envelope: ApiEnvelope<Vec<CodeforcesUser>> =
            serde_json::from_str(r#"{"status": "FAILED", "result": [{"handle": "x"}]}"#).unwrap();
        assert!(require_user(envelope, "x").is_err());
    }

    #[test]
    fn test_ok_status_with_missing_result_counts_zero() {
        let envelope: ApiEnvelope<Vec<Submission>> =
            serde_json::from_str(r#"{"status": "OK"}"#).unwrap();
        assert_eq!(solved_from_envelope(&envelope), 0);
    }

    // ========================================================================
    // Solved Counting
    // ========================================================================

    #[test]
    fn test_same_index_different_contests_are_distinct() {
        let subs: Vec<Submission> = serde_json::from_str(
            r#"[
                {"problem": {"contestId": 1, "index": "A"}, "verdict": "OK"},
                {"problem": {"contestId": 2, "index": "A"}, "verdict": "OK"}
            ]"#,
        )
        .unwrap();
        assert_eq!(count_solved(&subs), 2);
    }

    #[test]
    fn test_missing_contest_id_still_counts() {
        let subs: Vec<Submission> = serde_json::from_str(
            r#"[
                {"problem": {"index": "A"}, "verdict": "OK"},
                {"problem": {"index": "A"}, "verdict": "OK"}
            ]"#,
        )
        .unwrap();
        assert_eq!(count_solved(&subs), 1);
    }

    #[test]
    fn test_only_rejected_submissions() {
        let subs: Vec<Submission> = serde_json::from_str(
            r#"[
                {"problem": {"contestId": 1, "index": "A"}, "verdict": "TIME_LIMIT_EXCEEDED"},
                {"problem": {"contestId": 1, "index": "A"}, "verdict": "COMPILATION_ERROR"}
            ]"#,
        )
        .unwrap();
        assert_eq!(count_solved(&subs), 0);
    }

    #[test]
    fn test_title_photo_fallback() {
        let user: CodeforcesUser = serde_json::from_str(
            r#"{"handle": "a", "titlePhoto": "//userpic.codeforces.org/title.jpg"}"#,
        )
        .unwrap();
        assert_eq!(
            build_stats(user, 0, 0).avatar,
            "https://userpic.codeforces.org/title.jpg"
        );
    }
}

#[cfg(test)]
mod leetcode_parser_edge_tests {
    use crate::leetcode::graphql::{DifficultyCount, GraphQlResponse, ProfileData};
    use crate::leetcode::parser::{build_stats, require_user, solved_breakdown};

    #[test]
    fn test_empty_breakdown() {
        let solved = solved_breakdown(&[]);
        assert_eq!(solved.total, 0);
        assert_eq!(solved.hard, 0);
    }

    #[test]
    fn test_unknown_difficulty_ignored() {
        let counts: Vec<DifficultyCount> = serde_json::from_str(
            r#"[{"difficulty": "Insane", "count": 99}, {"difficulty": "All", "count": 1}]"#,
        )
        .unwrap();
        let solved = solved_breakdown(&counts);
        assert_eq!(solved.total, 1);
        assert_eq!(solved.easy + solved.medium + solved.hard, 0);
    }

    #[test]
    fn test_missing_profile_block_defaults() {
        let response: GraphQlResponse<ProfileData> =
            serde_json::from_str(r#"{"data": {"matchedUser": {"username": "bare"}}}"#).unwrap();
        let stats = build_stats(require_user(response, "bare").unwrap(), None);
        assert_eq!(stats.ranking, 0);
        assert_eq!(stats.avatar, "");
        assert_eq!(stats.solved.total, 0);
    }

    #[test]
    fn test_null_data_is_parse_failure() {
        let response: GraphQlResponse<ProfileData> =
            serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(require_user(response, "x").is_err());
    }
}

#[cfg(test)]
mod codechef_parser_edge_tests {
    use crate::codechef::parser::parse_profile;

    const BASE: &str = "https://www.codechef.com";

    #[test]
    fn test_empty_page_defaults() {
        let stats = parse_profile("<html><body></body></html>", "chef", BASE).unwrap();
        assert_eq!(stats.rating, 0);
        assert_eq!(stats.max_rating, 0);
        assert_eq!(stats.stars, 0);
        assert_eq!(stats.solved, 0);
        assert_eq!(stats.contests, 0);
        assert!(stats.global_rank.is_none());
        assert!(stats.country_rank.is_none());
        assert_eq!(
            stats.avatar,
            "https://www.codechef.com/misc/default-profile-image.png"
        );
    }

    #[test]
    fn test_max_rating_falls_back_to_rating() {
        let html = r#"<div class="rating-header"><div class="rating-number">1499</div></div>"#;
        let stats = parse_profile(html, "chef", BASE).unwrap();
        assert_eq!(stats.rating, 1499);
        assert_eq!(stats.max_rating, 1499);
    }

    #[test]
    fn test_zero_and_inactive_ranks_are_absent() {
        let html = r#"
            <div class="rating-ranks"><ul>
              <li><strong class="rank">0</strong></li>
              <li><strong class="rank">Inactive</strong></li>
            </ul></div>"#;
        let stats = parse_profile(html, "chef", BASE).unwrap();
        assert!(stats.global_rank.is_none());
        assert!(stats.country_rank.is_none());
    }

    #[test]
    fn test_protocol_relative_avatar() {
        let html = r#"<div class="user-profile-photo"><img src="//cdn.codechef.com/u.png"></div>"#;
        let stats = parse_profile(html, "chef", BASE).unwrap();
        assert_eq!(stats.avatar, "https://cdn.codechef.com/u.png");
    }

    #[test]
    fn test_h1_404_is_not_found() {
        let html = "<html><body><h1>Error 404</h1></body></html>";
        assert!(parse_profile(html, "ghost", BASE).is_err());
    }
}

#[cfg(test)]
mod gfg_parser_edge_tests {
    use crate::gfg::GfgError;
    use crate::gfg::parser::{has_user_data, parse_profile};

    const BASE: &str = "https://www.geeksforgeeks.org";

    #[test]
    fn test_user_data_marker_variants() {
        assert!(has_user_data(r#"{"userData":{}}"#));
        assert!(has_user_data(r#"{\"userData\":{}}"#));
        assert!(!has_user_data(r#"{"user_data":{}}"#));
    }

    #[test]
    fn test_fields_absent_default_to_zero() {
        let stats = parse_profile(r#"{"userData":{}}"#, "geek", BASE).unwrap();
        assert_eq!(stats.coding_score, 0);
        assert_eq!(stats.solved.total, 0);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 0);
        assert!(stats.institute_rank.is_none());
    }

    #[test]
    fn test_difficulty_breakdown_is_zero() {
        let stats =
            parse_profile(r#"{"userData":{"total_problems_solved":50}}"#, "geek", BASE).unwrap();
        assert_eq!(stats.solved.total, 50);
        assert_eq!(stats.solved.easy, 0);
        assert_eq!(stats.solved.medium, 0);
        assert_eq!(stats.solved.hard, 0);
    }

    #[test]
    fn test_404_marker_without_data() {
        assert!(matches!(
            parse_profile("<title>404</title>", "ghost", BASE),
            Err(GfgError::UserNotFound(_))
        ));
    }

    #[test]
    fn test_missing_data_message() {
        let err = parse_profile("<html></html>", "geek", BASE).unwrap_err();
        assert_eq!(err.to_string(), "Failed to find user data in profile page");
    }
}
