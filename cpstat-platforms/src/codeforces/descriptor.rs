//! Codeforces platform descriptor.

use cpstat_core::Platform;
use cpstat_fetch::{FetchContext, PlatformAdapter, TransportKind};

use super::api::CODEFORCES_API_BASE;
use super::fetcher::CodeforcesAdapter;
use crate::descriptor::{PlatformDescriptor, RawFuture};

/// Returns the Codeforces descriptor.
pub fn codeforces_descriptor() -> PlatformDescriptor {
    PlatformDescriptor {
        id: Platform::Codeforces,
        aliases: &[],
        site_url: "https://codeforces.com",
        api_base: CODEFORCES_API_BASE,
        profile_url_pattern: "https://codeforces.com/profile/{username}",
        transport: TransportKind::JsonApi,
        fetch_raw: fetch_codeforces_raw,
    }
}

fn fetch_codeforces_raw<'a>(ctx: &'a FetchContext, username: &'a str) -> RawFuture<'a> {
    Box::pin(async move { CodeforcesAdapter::new().fetch_raw(ctx, username).await })
}
