//! `[merge]` section configuration.
//!
//! Input tables are listed in priority order: a source earlier in the list
//! wins over every later source for the same redirect path.
//!
//! # Example
//!
//! ```toml
//! [merge]
//! output = "redirects/redirects.csv"   # Persisted redirect table
//!
//! [[merge.sources]]
//! name = "seed"                         # Provenance label
//! path = "redirects/seed.csv"           # Relative to project root
//! kind = "seed"                         # Column layout: seed | coverage
//!
//! [[merge.sources]]
//! name = "coverage"
//! path = "redirects/coverage.csv"
//! kind = "coverage"
//! status = 301                          # Status for rows without one
//!
//! [merge.rewrites]                      # Legacy destination -> new path
//! "/services.html" = "/services/consulting/"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::StatusCode;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Persisted redirect table path.
    pub output: PathBuf,

    /// Input tables, highest priority first.
    pub sources: Vec<SourceConfig>,

    /// Static legacy path -> new path rewrites for coverage destinations.
    pub rewrites: BTreeMap<String, String>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("redirects/redirects.csv"),
            sources: vec![
                SourceConfig::new("seed", "redirects/seed.csv", SourceKind::Seed),
                SourceConfig::new("coverage", "redirects/coverage.csv", SourceKind::Coverage),
            ],
            rewrites: BTreeMap::new(),
        }
    }
}

/// One ranked input table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Provenance label.
    pub name: String,

    /// Table path (relative to project root).
    pub path: PathBuf,

    /// Column layout and merge rules.
    pub kind: SourceKind,

    /// Abort when the file is absent.
    #[serde(default = "default_required")]
    pub required: bool,

    /// Status used when a row has none.
    #[serde(default)]
    pub status: Option<StatusCode>,
}

const fn default_required() -> bool {
    true
}

impl SourceConfig {
    pub fn new(name: &str, path: &str, kind: SourceKind) -> Self {
        Self {
            name: name.to_string(),
            path: PathBuf::from(path),
            kind,
            required: true,
            status: None,
        }
    }
}

/// Input table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Hand-curated: `from,to,status_code,note`. Taken verbatim.
    Seed,
    /// Audit-derived: `legacy_path,proposed_new_path,status[,status_code][,note]`.
    /// Rewritten, normalized, and `covered` rows skipped.
    Coverage,
}

impl MergeConfig {
    pub const OUTPUT: FieldPath = FieldPath::new("merge.output");
    pub const SOURCES: FieldPath = FieldPath::new("merge.sources");
    pub const REWRITES: FieldPath = FieldPath::new("merge.rewrites");

    pub(crate) fn normalize(&mut self, root: &Path) {
        self.output = root.join(&self.output);
        for source in &mut self.sources {
            source.path = root.join(&source.path);
        }
    }

    /// Validate `[merge]` values.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.sources.is_empty() {
            diag.error(Self::SOURCES, "at least one source table is required")
                .hint("add a [[merge.sources]] entry");
        }

        let mut names = FxHashSet::default();
        for source in &self.sources {
            if !names.insert(source.name.as_str()) {
                diag.error(
                    Self::SOURCES,
                    format!("duplicate source name `{}`", source.name),
                );
            }
            if source.path == self.output {
                diag.error(Self::OUTPUT, format!("same file as source `{}`", source.name))
                    .hint("the merged table must not overwrite an input");
            }
        }

        for legacy in self.rewrites.keys() {
            if !legacy.starts_with('/') {
                diag.error(
                    Self::REWRITES,
                    format!("rewrite keys must start with `/`: {legacy}"),
                );
            }
        }
    }
}
