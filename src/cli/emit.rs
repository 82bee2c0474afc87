//! `redirector emit`.

use anyhow::{Context, Result};

use crate::config::RedirectConfig;
use crate::core::artifact::read_artifact;
use crate::emit::{EmitContext, run_emit};
use crate::{debug, log};
use crate::utils::date::DateTimeUtc;
use crate::utils::plural_count;

/// Write every configured platform file from the redirect table.
pub fn emit_redirects(config: &RedirectConfig, now: DateTimeUtc) -> Result<()> {
    let artifact = read_artifact(&config.merge.output)?;
    let ctx = EmitContext::new(now).with_site_url(config.site.url.clone());
    debug!("emit"; "generated at {}", now.to_rfc3339());

    let summary = run_emit(&artifact.records, &config.emit, &ctx).context("emit failed")?;

    if summary.skipped > 0 {
        log!(
            "warning";
            "skipped {} with an empty destination",
            plural_count(summary.skipped, "redirect")
        );
    }
    for file in &summary.written {
        if !file.unsupported.is_empty() {
            log!(
                "warning";
                "{}: skipped {} with whitespace: {}",
                file.platform.name(),
                plural_count(file.unsupported.len(), "redirect"),
                file.unsupported.join(", ")
            );
        }
        log!(
            "emit";
            "{}: {} -> {}",
            file.platform.name(),
            plural_count(file.records, "redirect"),
            config.root_relative(&file.path).display()
        );
    }

    Ok(())
}
