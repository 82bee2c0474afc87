//! `redirector validate`.

mod report;

use anyhow::Result;

use crate::config::RedirectConfig;
use crate::core::artifact::read_artifact;
use crate::utils::plural_count;
use crate::validate::{ValidationReport, validate};
use crate::{debug, log};

/// Validate the redirect table, failing when any error is found.
pub fn validate_redirects(config: &RedirectConfig, json: bool) -> Result<()> {
    let report = run_checks(config)?;

    if json {
        println!("{}", report::to_json(&report)?);
    } else {
        report.print();
        log!("validate"; "{}", report);
    }

    if !report.passed() {
        anyhow::bail!(
            "validation failed: {}",
            plural_count(report.error_count(), "error")
        );
    }
    Ok(())
}

/// Read the table and site paths, then run every enabled check.
fn run_checks(config: &RedirectConfig) -> Result<ValidationReport> {
    let artifact = read_artifact(&config.merge.output)?;
    let site = config.site.load_paths()?;

    for source in &artifact.invalid_status {
        log!("warning"; "{}: status is not a redirect code, read as 301", source);
    }
    debug!(
        "validate";
        "{} against {}",
        plural_count(artifact.records.len(), "redirect"),
        plural_count(site.len(), "site path")
    );

    let report = validate(&artifact.records, &site, &config.validate);

    if report.targets_skipped {
        log!("hint"; "no [site] paths configured, skipping destination checks");
    }
    Ok(report)
}
