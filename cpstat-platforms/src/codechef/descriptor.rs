//! CodeChef platform descriptor.

use cpstat_core::Platform;
use cpstat_fetch::{FetchContext, PlatformAdapter, TransportKind};

use super::fetcher::{CODECHEF_BASE, CodeChefAdapter};
use crate::descriptor::{PlatformDescriptor, RawFuture};

/// Returns the CodeChef descriptor.
pub fn codechef_descriptor() -> PlatformDescriptor {
    PlatformDescriptor {
        id: Platform::CodeChef,
        aliases: &[],
        site_url: CODECHEF_BASE,
        api_base: CODECHEF_BASE,
        profile_url_pattern: "https://www.codechef.com/users/{username}",
        transport: TransportKind::HtmlScrape,
        fetch_raw: fetch_codechef_raw,
    }
}

fn fetch_codechef_raw<'a>(ctx: &'a FetchContext, username: &'a str) -> RawFuture<'a> {
    Box::pin(async move { CodeChefAdapter::new().fetch_raw(ctx, username).await })
}
