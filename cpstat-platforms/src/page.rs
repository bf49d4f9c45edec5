//! Profile page retrieval for the scraped platforms.

use cpstat_fetch::{FetchContext, FetchError, FetchRequest};
use reqwest::StatusCode;
use tracing::{debug, instrument};
use url::Url;

/// Builds `<base>/<section>/<username>` with the username path-encoded.
pub fn profile_url(base_url: &str, section: &str, username: &str) -> Result<Url, FetchError> {
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|()| FetchError::InvalidUrl(base_url.to_string()))?
        .pop_if_empty()
        .push(section)
        .push(username);
    Ok(url)
}

/// Fetches a profile page.
///
/// Returns `None` for HTTP 404. Other non-2xx statuses are errors.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_page(ctx: &FetchContext, url: &Url) -> Result<Option<String>, FetchError> {
    let response = ctx
        .http
        .fetch(FetchRequest::get(url.as_str()), ctx.timeout())
        .await?;

    if response.status() == StatusCode::NOT_FOUND {
        debug!("Profile page returned 404");
        return Ok(None);
    }

    let html = response.error_for_status()?.into_text();
    debug!(bytes = html.len(), "Fetched profile page");
    Ok(Some(html))
}
