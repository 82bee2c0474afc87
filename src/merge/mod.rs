//! Source merger.
//!
//! Unions ranked input tables into one [`RedirectTable`]:
//!
//! - Sources are applied in priority order; the first record for a source
//!   path wins and is never overwritten.
//! - Seed tables are taken verbatim.
//! - Coverage tables drop `covered` rows, rewrite legacy destinations and
//!   normalize trailing slashes.
//! - Rows without a source path are dropped.
//!
//! The merged table is persisted as the redirect artifact; validation and
//! emission only ever read that file.

mod rewrite;
mod source;
#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use thiserror::Error;

use crate::config::{MergeConfig, SourceKind};
use crate::core::{RedirectRecord, RedirectTable, StatusCode, artifact};

pub use rewrite::{PathRewrites, normalize_destination};
pub use source::{LoadedSource, RowFields, key_columns, load_sources};

/// Errors aborting a merge before any output is written.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("source `{name}` not found: {}", path.display())]
    MissingSource { name: String, path: PathBuf },

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] io::Error),
}

/// Per-source merge counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceStats {
    pub name: String,
    /// Optional source whose file was absent.
    pub missing: bool,
    /// Data rows read.
    pub rows: usize,
    /// Records added to the table.
    pub inserted: usize,
    /// Records dropped because a higher-ranked record owns the source.
    pub shadowed: usize,
    /// Shadowed count per winning source.
    pub shadowed_by: BTreeMap<String, usize>,
    /// Coverage rows dropped as `covered`.
    pub covered: usize,
    /// Rows dropped for an empty source path.
    pub empty: usize,
    /// Rows whose status was not a redirect code (merged as 301).
    pub invalid_status: usize,
    /// Key columns absent from the header row.
    pub missing_columns: Vec<&'static str>,
}

impl SourceStats {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// Merge result: the table plus per-source counters in rank order.
#[derive(Debug, Default)]
pub struct MergeOutcome {
    pub table: RedirectTable,
    pub stats: Vec<SourceStats>,
}

/// Union ranked sources into one table.
pub fn merge_sources(sources: &[LoadedSource], rewrites: PathRewrites<'_>) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    for loaded in sources {
        let config = &loaded.config;
        let mut stats = SourceStats::new(&config.name);

        let Some(table) = &loaded.table else {
            stats.missing = true;
            outcome.stats.push(stats);
            continue;
        };

        stats.missing_columns = key_columns(config.kind)
            .into_iter()
            .filter(|column| !table.has_column(column))
            .collect();

        let default_status = config.status.unwrap_or(StatusCode::PERMANENT);

        for row in table.rows() {
            stats.rows += 1;
            let fields = RowFields::read(config.kind, &row);

            if fields.covered {
                stats.covered += 1;
                continue;
            }
            if fields.source.is_empty() {
                stats.empty += 1;
                continue;
            }

            let status = if fields.status.is_empty() {
                default_status
            } else {
                let (status, fallback) = StatusCode::parse_or_default(fields.status);
                if fallback {
                    stats.invalid_status += 1;
                }
                status
            };

            let record = match config.kind {
                SourceKind::Seed => RedirectRecord::new(fields.source, fields.destination, status)
                    .with_note(fields.note),
                SourceKind::Coverage => {
                    let destination = normalize_destination(rewrites.apply(fields.destination));
                    let note = if fields.note.is_empty() {
                        config.name.as_str()
                    } else {
                        fields.note
                    };
                    RedirectRecord::new(fields.source, destination, status).with_note(note)
                }
            }
            .with_provenance(config.name.as_str());

            if outcome.table.insert(record) {
                stats.inserted += 1;
            } else {
                stats.shadowed += 1;
                let winner = outcome
                    .table
                    .get(fields.source)
                    .and_then(|r| r.provenance.as_deref())
                    .unwrap_or_default();
                *stats.shadowed_by.entry(winner.to_string()).or_default() += 1;
            }
        }

        outcome.stats.push(stats);
    }

    outcome
}

/// Load configured sources, merge them and persist the artifact.
///
/// Nothing is written when a required source is missing.
pub fn run_merge(config: &MergeConfig) -> Result<MergeOutcome> {
    let sources = load_sources(&config.sources)?;
    let outcome = merge_sources(&sources, PathRewrites::new(&config.rewrites));
    artifact::write_artifact(&config.output, &outcome.table)?;
    Ok(outcome)
}
