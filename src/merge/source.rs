//! Input tables and their column layouts.

use std::fs;

use crate::config::{SourceConfig, SourceKind};
use crate::csv::{CsvRow, CsvTable};

use super::MergeError;

/// Coverage `status` value for legacy paths that need no redirect.
const COVERED: &str = "covered";

/// A ranked source with its parsed table.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub config: SourceConfig,
    /// `None` for an optional source whose file is absent.
    pub table: Option<CsvTable>,
}

impl LoadedSource {
    pub fn new(config: SourceConfig, table: Option<CsvTable>) -> Self {
        Self { config, table }
    }

    /// Build from in-memory text.
    pub fn from_text(config: SourceConfig, text: &str) -> Self {
        Self::new(config, Some(CsvTable::parse(text)))
    }
}

/// Load every source, checking all required files before reading any.
pub fn load_sources(sources: &[SourceConfig]) -> Result<Vec<LoadedSource>, MergeError> {
    if let Some(missing) = sources.iter().find(|s| s.required && !s.path.is_file()) {
        return Err(MergeError::MissingSource {
            name: missing.name.clone(),
            path: missing.path.clone(),
        });
    }

    sources
        .iter()
        .map(|source| {
            if !source.path.is_file() {
                return Ok(LoadedSource::new(source.clone(), None));
            }
            let text = fs::read_to_string(&source.path)
                .map_err(|err| MergeError::Io(source.path.clone(), err))?;
            Ok(LoadedSource::from_text(source.clone(), &text))
        })
        .collect()
}

/// Fields of one input row, mapped from the kind's column names.
#[derive(Debug, Clone, Copy)]
pub struct RowFields<'a> {
    pub source: &'a str,
    pub destination: &'a str,
    pub status: &'a str,
    pub note: &'a str,
    /// Coverage rows already served by a live path.
    pub covered: bool,
}

/// Columns a table must have for rows to carry a source and destination.
pub fn key_columns(kind: SourceKind) -> [&'static str; 2] {
    match kind {
        SourceKind::Seed => ["from", "to"],
        SourceKind::Coverage => ["legacy_path", "proposed_new_path"],
    }
}

impl<'a> RowFields<'a> {
    pub fn read(kind: SourceKind, row: &CsvRow<'a>) -> Self {
        match kind {
            SourceKind::Seed => Self {
                source: row.get("from"),
                destination: row.get("to"),
                status: row.get("status_code"),
                note: row.get("note"),
                covered: false,
            },
            SourceKind::Coverage => Self {
                source: row.get("legacy_path"),
                destination: row.get("proposed_new_path"),
                status: row.get("status_code"),
                note: row.get("note"),
                covered: row.get("status").eq_ignore_ascii_case(COVERED),
            },
        }
    }
}
