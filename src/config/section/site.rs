//! `[site]` section configuration.
//!
//! Describes the new site: its public url and the live routes that
//! redirect destinations are checked against.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com"          # Shown in emitted file headers
//! paths = ["/", "/about/", "/blog/"]   # Live routes
//! paths_file = "site-paths.txt"        # Optional, one route per line, '#' comments
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};
use crate::core::SitePathSet;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Public url of the new site.
    pub url: Option<String>,

    /// Live site routes.
    pub paths: Vec<String>,

    /// File listing additional live routes (relative to project root).
    pub paths_file: Option<PathBuf>,
}

impl SiteSectionConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const PATHS: FieldPath = FieldPath::new("site.paths");

    pub(crate) fn normalize(&mut self, root: &Path) {
        if let Some(file) = self.paths_file.take() {
            self.paths_file = Some(root.join(file));
        }
    }

    /// Validate `[site]` values.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url {
            let parsed = url::Url::parse(url);
            let valid = parsed
                .as_ref()
                .is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some());
            if !valid {
                diag.error(Self::URL, format!("not an absolute http(s) url: {url}"))
                    .hint("use a full url such as \"https://example.com\"");
            }
        }

        for path in &self.paths {
            if !path.starts_with('/') {
                diag.error(Self::PATHS, format!("entries must start with `/`: {path}"));
            }
        }
    }

    /// Build the live path set from `paths` and `paths_file`.
    ///
    /// Only the validator reads `paths_file`, so a missing file fails here
    /// rather than at config load.
    pub fn load_paths(&self) -> Result<SitePathSet, ConfigError> {
        let mut paths = self.paths.clone();
        if let Some(file) = &self.paths_file {
            let text =
                fs::read_to_string(file).map_err(|err| ConfigError::Io(file.clone(), err))?;
            paths.extend(SitePathSet::parse_list(&text));
        }
        Ok(SitePathSet::new(paths))
    }
}
