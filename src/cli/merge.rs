//! `redirector merge`.

use anyhow::{Context, Result};

use crate::config::RedirectConfig;
use crate::merge::{MergeOutcome, SourceStats, run_merge};
use crate::utils::{plural_count, plural_s};
use crate::{debug, log};

/// Merge configured sources and write the redirect table.
pub fn merge_redirects(config: &RedirectConfig) -> Result<MergeOutcome> {
    let outcome = run_merge(&config.merge).context("merge failed")?;

    for stats in &outcome.stats {
        log_stats(stats);
    }
    log!(
        "merge";
        "wrote {} to {}",
        plural_count(outcome.table.len(), "redirect"),
        config.root_relative(&config.merge.output).display()
    );

    Ok(outcome)
}

fn log_stats(stats: &SourceStats) {
    if stats.missing {
        log!("merge"; "{}: not found, skipped", stats.name);
        return;
    }

    if !stats.missing_columns.is_empty() {
        log!(
            "warning";
            "{}: missing column{} {}",
            stats.name,
            plural_s(stats.missing_columns.len()),
            stats.missing_columns.join(", ")
        );
    }

    let mut parts = vec![plural_count(stats.inserted, "record")];
    if stats.shadowed > 0 {
        parts.push(format!("{} shadowed", stats.shadowed));
    }
    if stats.covered > 0 {
        parts.push(format!("{} covered", stats.covered));
    }
    if stats.empty > 0 {
        parts.push(format!("{} without source", stats.empty));
    }
    log!("merge"; "{}: {}", stats.name, parts.join(", "));
    debug!("merge"; "{}: {} read", stats.name, plural_count(stats.rows, "row"));
    for (winner, count) in &stats.shadowed_by {
        debug!("merge"; "{}: {} already owned by {winner}", stats.name, plural_count(*count, "source"));
    }

    if stats.invalid_status > 0 {
        log!(
            "warning";
            "{}: {} not a redirect code, using 301",
            stats.name,
            plural_count(stats.invalid_status, "status value")
        );
    }
}
