use log::{info, log_enabled, Level};

/// The scheme prefixed to urls entered without one.
pub const SECURE_SCHEME: &str = "https://";

/// Prefix the url with `https://` when it carries no http(s) scheme.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();

    if has_scheme(url, SECURE_SCHEME) || has_scheme(url, "http://") {
        url.to_string()
    } else {
        format!("{SECURE_SCHEME}{url}")
    }
}

fn has_scheme(url: &str, scheme: &str) -> bool {
    url.get(..scheme.len())
        .map(|prefix| prefix.eq_ignore_ascii_case(scheme))
        .unwrap_or_default()
}

/// Keep at most `max` characters of a response body for error messages.
pub fn excerpt(body: &str, max: usize) -> String {
    let body = body.trim();

    match body.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

/// log to console if configuration verbose.
pub fn log(message: &'static str, data: impl AsRef<str>) {
    if log_enabled!(Level::Info) {
        info!("{message} - {}", data.as_ref());
    }
}
