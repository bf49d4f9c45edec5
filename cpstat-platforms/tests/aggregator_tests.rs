//! End-to-end aggregation against mock servers.

mod common;

use std::time::Instant;

use common::*;
use cpstat_core::{FetchOptions, Platform, UserHandles};
use cpstat_platforms::{
    CodeChefAdapter, CodeforcesAdapter, GfgAdapter, LeetCodeAdapter, StatsAggregator,
};
use serde_json::json;
use wiremock::{MockServer, ResponseTemplate};

fn aggregator_for(server: &MockServer) -> StatsAggregator {
    StatsAggregator::new()
        .with_codeforces(CodeforcesAdapter::with_base_url(server.uri()))
        .with_leetcode(LeetCodeAdapter::with_base_url(server.uri()))
        .with_codechef(CodeChefAdapter::with_base_url(server.uri()))
        .with_gfg(GfgAdapter::with_base_url(server.uri()))
}

#[tokio::test]
async fn test_failures_are_isolated() {
    let server = MockServer::start().await;
    mount_alice(&server).await;
    mount_page(&server, "/users/nobody", ResponseTemplate::new(404)).await;

    let handles = UserHandles::new()
        .with(Platform::Codeforces, "alice")
        .with(Platform::CodeChef, "nobody");
    let stats = aggregator_for(&server)
        .get_all_stats(&handles, &FetchOptions::with_timeout_ms(5_000))
        .await
        .unwrap();

    assert_eq!(stats.len(), 2);
    assert_eq!(stats.is_success(Platform::Codeforces), Some(true));
    assert_eq!(stats.is_success(Platform::CodeChef), Some(false));
    assert_eq!(
        stats.error(Platform::CodeChef),
        Some("[CodeChef] User \"nobody\" not found")
    );

    let codeforces = stats.codeforces.as_ref().and_then(|r| r.data()).unwrap();
    assert_eq!(codeforces.solved, 2);
}

#[tokio::test]
async fn test_unrequested_platforms_are_absent() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/profile/geek",
        ResponseTemplate::new(200).set_body_string(GFG_PAGE),
    )
    .await;

    let handles = UserHandles::new().with(Platform::GeeksforGeeks, "geek");
    let stats = aggregator_for(&server)
        .get_all_stats(&handles, &FetchOptions::with_timeout_ms(5_000))
        .await
        .unwrap();

    assert_eq!(stats.platforms(), vec![Platform::GeeksforGeeks]);
    assert!(!stats.contains(Platform::Codeforces));
    assert!(!stats.contains(Platform::LeetCode));
    assert!(!stats.contains(Platform::CodeChef));

    let value = serde_json::to_value(&stats).unwrap();
    assert!(value.get("codeforces").is_none());
    assert_eq!(value["gfg"]["success"], true);
}

#[tokio::test]
async fn test_slow_platform_times_out_without_blocking_others() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/profile/geek",
        ResponseTemplate::new(200).set_body_string(GFG_PAGE),
    )
    .await;
    mount_page(
        &server,
        "/users/slowchef",
        ResponseTemplate::new(200)
            .set_body_string(CODECHEF_PAGE)
            .set_delay(SLOW),
    )
    .await;

    let handles = UserHandles::new()
        .with(Platform::CodeChef, "slowchef")
        .with(Platform::GeeksforGeeks, "geek");

    let start = Instant::now();
    let stats = aggregator_for(&server)
        .get_all_stats(&handles, &FetchOptions::with_timeout_ms(200))
        .await
        .unwrap();
    let elapsed = start.elapsed();

    assert!(elapsed < SLOW, "aggregation waited for the slow server: {elapsed:?}");
    assert_eq!(
        stats.error(Platform::CodeChef),
        Some("[CodeChef] Request timeout after 200ms")
    );
    assert_eq!(stats.is_success(Platform::GeeksforGeeks), Some(true));
}

#[tokio::test]
async fn test_repeated_runs_serialize_identically() {
    let server = MockServer::start().await;
    mount_alice(&server).await;
    mount_leetcode(
        &server,
        leetcode_profile("neal"),
        json!({"data": {"userContestRanking": null}}),
    )
    .await;
    mount_page(
        &server,
        "/users/chef_one",
        ResponseTemplate::new(200).set_body_string(CODECHEF_PAGE),
    )
    .await;
    mount_page(
        &server,
        "/profile/geek",
        ResponseTemplate::new(200).set_body_string(GFG_PAGE),
    )
    .await;

    let handles = UserHandles::new()
        .with(Platform::Codeforces, "alice")
        .with(Platform::LeetCode, "neal")
        .with(Platform::CodeChef, "chef_one")
        .with(Platform::GeeksforGeeks, "geek");
    let aggregator = aggregator_for(&server);
    let options = FetchOptions::with_timeout_ms(5_000);

    let first = aggregator.get_all_stats(&handles, &options).await.unwrap();
    let second = aggregator.get_all_stats(&handles, &options).await.unwrap();

    assert_eq!(first.len(), 4);
    assert!(first.failures().is_empty());
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_fetch_all_with_shared_context() {
    let server = MockServer::start().await;
    mount_alice(&server).await;

    let handles = UserHandles::new().with(Platform::Codeforces, "alice");
    let stats = aggregator_for(&server).fetch_all(&ctx(), &handles).await;

    assert_eq!(stats.platforms(), vec![Platform::Codeforces]);
    assert_eq!(stats.is_success(Platform::Codeforces), Some(true));
}
