//! LeetCode platform descriptor.

use cpstat_core::Platform;
use cpstat_fetch::{FetchContext, PlatformAdapter, TransportKind};

use super::fetcher::LeetCodeAdapter;
use super::graphql::LEETCODE_BASE;
use crate::descriptor::{PlatformDescriptor, RawFuture};

/// Returns the LeetCode descriptor.
pub fn leetcode_descriptor() -> PlatformDescriptor {
    PlatformDescriptor {
        id: Platform::LeetCode,
        aliases: &[],
        site_url: LEETCODE_BASE,
        api_base: "https://leetcode.com/graphql/",
        profile_url_pattern: "https://leetcode.com/u/{username}/",
        transport: TransportKind::GraphQl,
        fetch_raw: fetch_leetcode_raw,
    }
}

fn fetch_leetcode_raw<'a>(ctx: &'a FetchContext, username: &'a str) -> RawFuture<'a> {
    Box::pin(async move { LeetCodeAdapter::new().fetch_raw(ctx, username).await })
}
