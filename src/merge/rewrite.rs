//! Destination rewriting for audit-derived tables.
//!
//! Two steps run on every coverage destination before insertion:
//! 1. Legacy path -> new path lookup (`[merge.rewrites]`)
//! 2. Trailing-slash normalization so lookups against the live path set agree

use std::collections::BTreeMap;

use crate::utils::route::{has_file_extension, has_query_or_fragment, is_external_link};

/// Static legacy path -> new path table.
#[derive(Debug, Clone, Copy)]
pub struct PathRewrites<'a> {
    map: &'a BTreeMap<String, String>,
}

impl<'a> PathRewrites<'a> {
    pub const fn new(map: &'a BTreeMap<String, String>) -> Self {
        Self { map }
    }

    /// Rewrite a destination. Unmapped destinations pass through unchanged.
    pub fn apply<'d>(&self, destination: &'d str) -> &'d str
    where
        'a: 'd,
    {
        self.map.get(destination).map_or(destination, |s| s.as_str())
    }
}

/// Coerce a site path to end with `/`.
///
/// Left unchanged: external urls, empty values, root, paths that already end
/// with `/`, paths carrying a query or fragment, and file paths (`/feed.xml`).
pub fn normalize_destination(destination: &str) -> String {
    let skip = destination.is_empty()
        || destination.ends_with('/')
        || is_external_link(destination)
        || has_query_or_fragment(destination)
        || has_file_extension(destination);

    if skip {
        destination.to_string()
    } else {
        format!("{destination}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrites() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("/services.html".to_string(), "/services/consulting/".to_string()),
            ("/about-us".to_string(), "/about".to_string()),
        ])
    }

    #[test]
    fn test_apply_mapped() {
        let map = rewrites();
        let rewrites = PathRewrites::new(&map);
        assert_eq!(rewrites.apply("/services.html"), "/services/consulting/");
        assert_eq!(rewrites.apply("/about-us"), "/about");
    }

    #[test]
    fn test_apply_unmapped_passes_through() {
        let map = rewrites();
        let rewrites = PathRewrites::new(&map);
        assert_eq!(rewrites.apply("/contact"), "/contact");
        assert_eq!(rewrites.apply("/services.html?x=1"), "/services.html?x=1");
    }

    #[test]
    fn test_normalize_adds_trailing_slash() {
        assert_eq!(normalize_destination("/about"), "/about/");
        assert_eq!(normalize_destination("/blog/post-1"), "/blog/post-1/");
    }

    #[test]
    fn test_normalize_leaves_special_cases() {
        assert_eq!(normalize_destination("/"), "/");
        assert_eq!(normalize_destination(""), "");
        assert_eq!(normalize_destination("/about/"), "/about/");
        assert_eq!(normalize_destination("/feed.xml"), "/feed.xml");
        assert_eq!(normalize_destination("/about#team"), "/about#team");
        assert_eq!(normalize_destination("/search?q=x"), "/search?q=x");
        assert_eq!(
            normalize_destination("https://example.com/x"),
            "https://example.com/x"
        );
        assert_eq!(normalize_destination("//cdn.example.com/x"), "//cdn.example.com/x");
    }

    #[test]
    fn test_rewrite_then_normalize() {
        let map = rewrites();
        let rewrites = PathRewrites::new(&map);
        assert_eq!(normalize_destination(rewrites.apply("/about-us")), "/about/");
    }
}
