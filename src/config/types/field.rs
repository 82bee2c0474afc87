//! Dotted names of config settings.

use std::fmt;

/// Name of a setting as written in `redirects.toml` (`merge.sources`).
///
/// Sections expose these as associated constants so diagnostics and
/// messages never drift from the actual key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Renders as `` `site.url` `` for use inside messages.
impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.0)
    }
}
