//! Shared fixtures for the mock-server tests.

#![allow(dead_code)]

use std::time::Duration;

use cpstat_core::FetchOptions;
use cpstat_fetch::FetchContext;
use serde_json::{Value, json};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Context with a generous timeout for tests that should not time out.
pub fn ctx() -> FetchContext {
    ctx_with_timeout(5_000)
}

/// Context with the given timeout in milliseconds.
pub fn ctx_with_timeout(timeout_ms: u64) -> FetchContext {
    FetchContext::from_options(&FetchOptions::with_timeout_ms(timeout_ms)).unwrap()
}

// ============================================================================
// Codeforces
// ============================================================================

pub fn alice_info() -> Value {
    json!({
        "status": "OK",
        "result": [{
            "handle": "alice",
            "rating": 1500,
            "maxRating": 1600,
            "rank": "expert",
            "avatar": "//userpic.codeforces.org/alice.jpg"
        }]
    })
}

/// Three accepted submissions across two problems plus one rejection.
pub fn alice_submissions() -> Value {
    json!({
        "status": "OK",
        "result": [
            {"problem": {"contestId": 1, "index": "A"}, "verdict": "OK"},
            {"problem": {"contestId": 1, "index": "A"}, "verdict": "OK"},
            {"problem": {"contestId": 1, "index": "B"}, "verdict": "OK"},
            {"problem": {"contestId": 1, "index": "C"}, "verdict": "WRONG_ANSWER"}
        ]
    })
}

pub fn alice_rating() -> Value {
    json!({
        "status": "OK",
        "result": [
            {"contestId": 1, "newRating": 1400},
            {"contestId": 2, "newRating": 1600},
            {"contestId": 3, "newRating": 1500}
        ]
    })
}

pub async fn mount_codeforces_user(
    server: &MockServer,
    handle: &str,
    info: Value,
    submissions: ResponseTemplate,
    rating: ResponseTemplate,
) {
    Mock::given(method("GET"))
        .and(path("/user.info"))
        .and(query_param("handles", handle))
        .respond_with(ResponseTemplate::new(200).set_body_json(info))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user.status"))
        .and(query_param("handle", handle))
        .respond_with(submissions)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user.rating"))
        .and(query_param("handle", handle))
        .respond_with(rating)
        .mount(server)
        .await;
}

pub async fn mount_alice(server: &MockServer) {
    mount_codeforces_user(
        server,
        "alice",
        alice_info(),
        ResponseTemplate::new(200).set_body_json(alice_submissions()),
        ResponseTemplate::new(200).set_body_json(alice_rating()),
    )
    .await;
}

// ============================================================================
// LeetCode
// ============================================================================

pub fn leetcode_profile(username: &str) -> Value {
    json!({
        "data": {
            "matchedUser": {
                "username": username,
                "profile": {
                    "realName": "Neal",
                    "userAvatar": "https://assets.leetcode.com/users/neal.png",
                    "ranking": 5321
                },
                "submitStats": {
                    "acSubmissionNum": [
                        {"difficulty": "All", "count": 600},
                        {"difficulty": "Easy", "count": 200},
                        {"difficulty": "Medium", "count": 300},
                        {"difficulty": "Hard", "count": 100}
                    ]
                }
            }
        }
    })
}

pub async fn mount_leetcode(server: &MockServer, profile: Value, contest: Value) {
    Mock::given(method("POST"))
        .and(path("/graphql/"))
        .and(body_string_contains("matchedUser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/graphql/"))
        .and(body_string_contains("userContestRanking"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contest))
        .mount(server)
        .await;
}

// ============================================================================
// CodeChef
// ============================================================================

pub const CODECHEF_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>chef_one | CodeChef User Profile</title></head><body>
  <div class="user-profile-photo"><img src="/sites/default/files/chef_one.jpg"></div>
  <div class="rating-header">
    <div class="rating-number">2011</div>
    <div class="rating-star"><span>&#9733;</span><span>&#9733;</span><span>&#9733;</span><span>&#9733;</span><span>&#9733;</span></div>
    <small>(Highest Rating 2105)</small>
  </div>
  <div class="rating-ranks"><ul>
    <li><a><strong class="rank">1,250</strong></a> Global Rank</li>
    <li><a><strong class="rank">310</strong></a> Country Rank</li>
  </ul></div>
  <section class="rating-data-section problems-solved">
    <h3>Total Problems Solved: 275</h3>
    <h3>Contests (48)</h3>
  </section>
</body></html>"#;

pub async fn mount_page(server: &MockServer, page_path: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// GeeksforGeeks
// ============================================================================

pub const GFG_PAGE: &str = r#"<html><body><script>
self.__next_f.push([1,"{\"userData\":{\"data\":{\"score\":1234,\"monthly_score\":56,\"total_problems_solved\":321,\"institute_rank\":7,\"profile_image_url\":\"\/\/media.geeksforgeeks.org\/img\/geek.png\",\"pod_solved_global_longest_streak\":45,\"pod_solved_current_streak\":3}}}"])
</script></body></html>"#;

/// Delay long enough to trip any timeout used in these tests.
pub const SLOW: Duration = Duration::from_secs(3);
