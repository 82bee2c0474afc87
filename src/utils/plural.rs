//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 redirects)
/// - `plural_s(1)` -> `""` (1 redirect)
/// - `plural_s(5)` -> `"s"` (5 redirects)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// `plural_count(3, "redirect")` -> `"3 redirects"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "chain"), "0 chains");
        assert_eq!(plural_count(1, "chain"), "1 chain");
        assert_eq!(plural_count(12, "redirect"), "12 redirects");
    }
}
