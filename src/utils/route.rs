//! Redirect path classification.
//!
//! Pure string helpers used by the merger and the validator:
//! - External link detection (URL scheme or protocol-relative `//host`)
//! - Query/fragment splitting for path-set lookups
//! - File extension detection for trailing-slash normalization

/// Check if a destination is external (has a URL scheme like https:, mailto:, etc.)
///
/// Protocol-relative urls (`//cdn.example.com/x`) are external too.
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```ignore
/// assert!(is_external_link("https://example.com/x"));
/// assert!(is_external_link("mailto:team@example.com"));
/// assert!(!is_external_link("/about/"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    if link.starts_with("//") {
        return true;
    }
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Strip query string and fragment, returning only the path part.
///
/// `/about/?ref=nav#team` -> `/about/`
#[inline]
pub fn strip_query_fragment(link: &str) -> &str {
    link.split(['?', '#']).next().unwrap_or(link)
}

/// Check if the link carries a query string or fragment.
#[inline]
pub fn has_query_or_fragment(link: &str) -> bool {
    link.contains(['?', '#'])
}

/// Check if the last path segment looks like a file (`/files/report.pdf`).
///
/// Dotfiles (`/.well-known`) don't count as an extension.
pub fn has_file_extension(path: &str) -> bool {
    let last = strip_query_fragment(path)
        .rsplit('/')
        .next()
        .unwrap_or_default();
    last.rfind('.').is_some_and(|pos| pos > 0 && pos + 1 < last.len())
}

/// Toggle the trailing slash of a path (`/a` <-> `/a/`). Root stays `/`.
pub fn toggle_trailing_slash(path: &str) -> String {
    if path == "/" {
        return path.to_string();
    }
    match path.strip_suffix('/') {
        Some(trimmed) => trimmed.to_string(),
        None => format!("{path}/"),
    }
}
