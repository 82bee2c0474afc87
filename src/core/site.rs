//! The set of live site paths used as the destination oracle.

use rustc_hash::FxHashSet;

use crate::utils::route::{strip_query_fragment, toggle_trailing_slash};

/// Canonical live routes of the new site.
///
/// Lookups ignore query strings, fragments and the trailing slash, so
/// `/about`, `/about/` and `/about/#team` all match a registered `/about/`.
#[derive(Debug, Clone, Default)]
pub struct SitePathSet {
    paths: FxHashSet<String>,
}

impl SitePathSet {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths = paths
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        Self { paths }
    }

    /// Parse a paths file: one path per line, `#` starts a comment line.
    pub fn parse_list(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Check if a site-relative destination points at a live route.
    pub fn contains(&self, destination: &str) -> bool {
        let path = strip_query_fragment(destination);
        if path.is_empty() {
            return false;
        }
        self.paths.contains(path) || self.paths.contains(&toggle_trailing_slash(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SitePathSet {
        SitePathSet::new(["/", "/about/", "/services/consulting/", "/feed.xml"])
    }

    #[test]
    fn test_contains_exact() {
        let site = site();
        assert!(site.contains("/"));
        assert!(site.contains("/about/"));
        assert!(site.contains("/feed.xml"));
        assert!(!site.contains("/missing/"));
    }

    #[test]
    fn test_contains_ignores_trailing_slash() {
        let site = site();
        assert!(site.contains("/about"));
        assert!(site.contains("/services/consulting"));
        assert!(site.contains("/feed.xml/"));
    }

    #[test]
    fn test_contains_ignores_query_and_fragment() {
        let site = site();
        assert!(site.contains("/about/#team"));
        assert!(site.contains("/about?ref=nav"));
        assert!(!site.contains("#team"));
    }

    #[test]
    fn test_empty_destination_is_not_live() {
        assert!(!site().contains(""));
    }

    #[test]
    fn test_parse_list() {
        let list = SitePathSet::parse_list("# live routes\n/\n\n  /about/  \n# old\n/blog/\n");
        assert_eq!(list, ["/", "/about/", "/blog/"]);
        assert_eq!(SitePathSet::new(&list).len(), 3);
    }
}
