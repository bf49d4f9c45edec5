//! GeeksforGeeks platform descriptor.

use cpstat_core::Platform;
use cpstat_fetch::{FetchContext, PlatformAdapter, TransportKind};

use super::fetcher::{GFG_BASE, GfgAdapter};
use crate::descriptor::{PlatformDescriptor, RawFuture};

/// Returns the GeeksforGeeks descriptor.
pub fn gfg_descriptor() -> PlatformDescriptor {
    PlatformDescriptor {
        id: Platform::GeeksforGeeks,
        aliases: &["geeksforgeeks", "geeks"],
        site_url: GFG_BASE,
        api_base: GFG_BASE,
        profile_url_pattern: "https://www.geeksforgeeks.org/profile/{username}",
        transport: TransportKind::HtmlScrape,
        fetch_raw: fetch_gfg_raw,
    }
}

fn fetch_gfg_raw<'a>(ctx: &'a FetchContext, username: &'a str) -> RawFuture<'a> {
    Box::pin(async move { GfgAdapter::new().fetch_raw(ctx, username).await })
}
