//! `redirector build`: merge, validate, emit.

use anyhow::Result;

use super::{emit::emit_redirects, merge::merge_redirects, validate::validate_redirects};
use crate::config::RedirectConfig;
use crate::utils::date::DateTimeUtc;

/// Run every stage in dependency order.
///
/// Each stage reads the previous stage's files, so a failed validation
/// stops the run before anything is emitted.
pub fn build_all(config: &RedirectConfig, now: DateTimeUtc) -> Result<()> {
    merge_redirects(config)?;
    validate_redirects(config, false)?;
    emit_redirects(config, now)
}
