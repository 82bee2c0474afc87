//! The persisted redirect table (`from,to,status_code,note`).
//!
//! This file is the only handoff between merge, validate and emit.
//! Reading it back yields a plain record list: a hand-edited artifact may
//! contain duplicate sources, which the validator must still see.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use thiserror::Error;

use super::{RedirectRecord, StatusCode};
use crate::csv::{CsvTable, escape_field, quote_field};
use crate::utils::fs::write_atomic;

/// Header row of the persisted table.
pub const ARTIFACT_HEADER: &str = "from,to,status_code,note";

/// Errors reading the persisted table.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("redirect table `{0}` not found (run `redirector merge` first)")]
    Missing(PathBuf),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] io::Error),
}

/// Records read back from the artifact.
#[derive(Debug, Default)]
pub struct ArtifactRecords {
    /// Records in file order.
    pub records: Vec<RedirectRecord>,
    /// Sources whose status column was not a redirect code (read as 301).
    pub invalid_status: Vec<String>,
}

/// Render records as artifact text. `note` is always quoted.
pub fn render_artifact<'a>(records: impl IntoIterator<Item = &'a RedirectRecord>) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(ARTIFACT_HEADER);
    out.push('\n');

    for record in records {
        out.push_str(&escape_field(&record.source));
        out.push(',');
        out.push_str(&escape_field(&record.destination));
        out.push(',');
        out.push_str(&record.status.to_string());
        out.push(',');
        out.push_str(&quote_field(&record.note));
        out.push('\n');
    }

    out
}

/// Parse artifact text. Rows without a source are dropped.
pub fn parse_artifact(text: &str) -> ArtifactRecords {
    let table = CsvTable::parse(text);
    let mut parsed = ArtifactRecords::default();

    for row in table.rows() {
        let source = row.get("from");
        if source.is_empty() {
            continue;
        }

        let (status, fallback) = StatusCode::parse_or_default(row.get("status_code"));
        if fallback {
            parsed.invalid_status.push(source.to_string());
        }

        parsed.records.push(
            RedirectRecord::new(source, row.get("to"), status).with_note(row.get("note")),
        );
    }

    parsed
}

/// Write records to the artifact path atomically.
pub fn write_artifact<'a>(
    path: &Path,
    records: impl IntoIterator<Item = &'a RedirectRecord>,
) -> Result<()> {
    write_atomic(path, &render_artifact(records))
}

/// Read the artifact, failing fast when it does not exist.
pub fn read_artifact(path: &Path) -> Result<ArtifactRecords, ArtifactError> {
    if !path.is_file() {
        return Err(ArtifactError::Missing(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|err| ArtifactError::Io(path.to_path_buf(), err))?;
    Ok(parse_artifact(&text))
}
