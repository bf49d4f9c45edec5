//! Avatar URL normalization shared by the adapters.

/// Turns `//host/path` into `https://host/path`. Anything else is returned
/// trimmed and unchanged.
pub fn resolve_protocol_relative(src: &str) -> String {
    let src = src.trim();
    match src.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => src.to_string(),
    }
}

/// Like [`resolve_protocol_relative`], but also prefixes root-relative
/// paths (`/path`) with `base_url`.
pub fn resolve_against(src: &str, base_url: &str) -> String {
    let src = src.trim();
    if src.starts_with("//") {
        resolve_protocol_relative(src)
    } else if src.starts_with('/') {
        format!("{}{src}", base_url.trim_end_matches('/'))
    } else {
        src.to_string()
    }
}

/// Substitutes `<base_url><default_path>` for an empty avatar.
pub fn or_default(avatar: String, base_url: &str, default_path: &str) -> String {
    if avatar.is_empty() {
        format!("{}{default_path}", base_url.trim_end_matches('/'))
    } else {
        avatar
    }
}
