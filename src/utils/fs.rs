//! Whole-file writes.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Write content to a file atomically using tempfile + rename.
///
/// Readers see either the previous file or the complete new one.
/// Parent directories are created as needed.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory {}", parent.display()))?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
