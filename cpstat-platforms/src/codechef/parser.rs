//! CodeChef profile page parser.
//!
//! Every field has a fallback, so a layout change degrades to zeros
//! instead of failing the whole fetch.

use std::str::FromStr;
use std::sync::LazyLock;

use cpstat_core::CodeChefStats;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::error::CodeChefError;
use crate::avatar;

/// Served when the profile has no photo.
pub const DEFAULT_AVATAR_PATH: &str = "/misc/default-profile-image.png";

// ============================================================================
// Selectors & Patterns
// ============================================================================

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("Invalid selector")
}

static NOT_FOUND_SEL: LazyLock<Selector> = LazyLock::new(|| selector("h1, title"));
static PROFILE_MARKER_SEL: LazyLock<Selector> = LazyLock::new(|| {
    selector(".user-details-container, .rating-header, .rating-number, .user-profile-photo")
});
static RATING_NUMBER_SEL: LazyLock<Selector> = LazyLock::new(|| selector(".rating-number"));
static RATING_HEADER_SEL: LazyLock<Selector> = LazyLock::new(|| selector(".rating-header"));
static STAR_SEL: LazyLock<Selector> = LazyLock::new(|| selector(".rating-star span"));
static H3_SEL: LazyLock<Selector> = LazyLock::new(|| selector("h3"));
static RANK_ITEM_SEL: LazyLock<Selector> = LazyLock::new(|| selector(".rating-ranks ul li"));
static RANK_SEL: LazyLock<Selector> = LazyLock::new(|| selector(".rank"));
static AVATAR_SEL: LazyLock<Selector> = LazyLock::new(|| selector(".user-profile-photo img"));

static NOT_FOUND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b404\b|page not found").expect("Invalid regex")
});

static HIGHEST_RATING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Highest Rating\s*(\d+)").expect("Invalid regex")
});

static SOLVED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Total Problems Solved:\s*(\d+)").expect("Invalid regex")
});

static CONTESTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Contests\s*\((\d+)\)").expect("Invalid regex")
});

// ============================================================================
// Parsing
// ============================================================================

/// Parses a profile page into stats.
pub fn parse_profile(
    html: &str,
    username: &str,
    base_url: &str,
) -> Result<CodeChefStats, CodeChefError> {
    let document = Html::parse_document(html);
    if is_not_found(&document, username) {
        return Err(CodeChefError::UserNotFound(username.to_string()));
    }

    let rating = document
        .select(&RATING_NUMBER_SEL)
        .next()
        .and_then(|el| leading_int(&element_text(el)))
        .unwrap_or(0);

    let max_rating = document
        .select(&RATING_HEADER_SEL)
        .find_map(|el| capture_int(&HIGHEST_RATING_RE, &element_text(el)))
        .unwrap_or(rating);

    let stars = u32::try_from(document.select(&STAR_SEL).count()).unwrap_or(u32::MAX);

    let solved = find_in_headings(&document, &SOLVED_RE).unwrap_or(0);
    let contests = find_in_headings(&document, &CONTESTS_RE).unwrap_or(0);

    let mut rank_items = document.select(&RANK_ITEM_SEL);
    let global_rank = rank_items.next().and_then(rank_in_item);
    let country_rank = rank_items.next().and_then(rank_in_item);

    let avatar_src = document
        .select(&AVATAR_SEL)
        .next()
        .and_then(|img| img.value().attr("src"))
        .unwrap_or_default();
    let avatar = avatar::or_default(
        avatar::resolve_against(avatar_src, base_url),
        base_url,
        DEFAULT_AVATAR_PATH,
    );

    Ok(CodeChefStats {
        username: username.to_string(),
        rating,
        max_rating,
        stars,
        solved,
        contests,
        global_rank,
        country_rank,
        avatar,
    })
}

/// Returns true for CodeChef's 404 page.
///
/// A page carrying any profile block is a profile. Otherwise a heading or
/// title must say `404` or "Page not found" outside the requested handle.
pub fn is_not_found(document: &Html, username: &str) -> bool {
    if document.select(&PROFILE_MARKER_SEL).next().is_some() {
        return false;
    }
    document.select(&NOT_FOUND_SEL).any(|el| {
        let text = element_text(el);
        let text = if username.is_empty() {
            text
        } else {
            text.replace(username, " ")
        };
        NOT_FOUND_RE.is_match(&text)
    })
}

/// Returns true if the raw page is CodeChef's 404 page for `username`.
pub fn page_is_not_found(html: &str, username: &str) -> bool {
    is_not_found(&Html::parse_document(html), username)
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

fn find_in_headings(document: &Html, pattern: &Regex) -> Option<u32> {
    document
        .select(&H3_SEL)
        .find_map(|h3| capture_int(pattern, &element_text(h3)))
}

fn capture_int<T: FromStr>(pattern: &Regex, text: &str) -> Option<T> {
    pattern.captures(text)?.get(1)?.as_str().parse().ok()
}

fn rank_in_item(item: ElementRef<'_>) -> Option<u64> {
    let text: String = item.select(&RANK_SEL).map(element_text).collect();
    parse_rank(&text)
}

/// Parses a rank like `1,234`. Zero or unparsable text means no rank.
pub fn parse_rank(text: &str) -> Option<u64> {
    leading_int(&text.replace(',', "")).filter(|rank| *rank != 0)
}

/// Parses the leading run of digits, ignoring surrounding whitespace.
pub fn leading_int<T: FromStr>(text: &str) -> Option<T> {
    let text = text.trim_start();
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}
