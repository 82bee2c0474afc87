//! Platform emitters.
//!
//! Renders the persisted redirect table for each hosting platform:
//!
//! - **Netlify**: rule list (`_redirects`)
//! - **Vercel**: structured config (`vercel.json`)
//! - **nginx**: `location` rules for an `include` (`nginx-redirects.conf`)
//!
//! Renderers are pure: records and an [`EmitContext`] in, text out.
//! Records keep their order and are never altered.

mod netlify;
mod nginx;
mod vercel;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::{EmitConfig, Platform};
use crate::core::RedirectRecord;
use crate::utils::date::DateTimeUtc;
use crate::utils::fs::write_atomic;

/// Values stamped into generated headers.
#[derive(Debug, Clone)]
pub struct EmitContext {
    /// Generation time (UTC).
    pub generated: DateTimeUtc,
    /// `[site] url`, shown in comment headers.
    pub site_url: Option<String>,
}

impl EmitContext {
    pub fn new(generated: DateTimeUtc) -> Self {
        Self {
            generated,
            site_url: None,
        }
    }

    pub fn with_site_url(mut self, url: Option<String>) -> Self {
        self.site_url = url;
        self
    }

    /// Shared `#` comment header for line-based formats.
    fn comment_header(&self, count: usize) -> String {
        let mut header = format!("# Generated by redirector on {}\n", self.generated.to_date_string());
        if let Some(url) = &self.site_url {
            header.push_str(&format!("# Site: {url}\n"));
        }
        header.push_str(&format!("# {}\n", crate::utils::plural_count(count, "redirect")));
        header
    }
}

/// Records every platform can express, plus the number skipped.
///
/// Records with an empty destination are dropped.
pub fn emittable(records: &[RedirectRecord]) -> (Vec<&RedirectRecord>, usize) {
    let kept: Vec<_> = records
        .iter()
        .filter(|record| !record.destination.is_empty())
        .collect();
    let skipped = records.len() - kept.len();
    (kept, skipped)
}

/// Whether `platform` can express the record.
fn expressible(platform: Platform, record: &RedirectRecord) -> bool {
    match platform {
        Platform::Netlify => netlify::expressible(record),
        Platform::Vercel | Platform::Nginx => true,
    }
}

/// Render records for one platform.
pub fn render(platform: Platform, records: &[&RedirectRecord], ctx: &EmitContext) -> Result<String> {
    let text = match platform {
        Platform::Netlify => netlify::render(records, ctx),
        Platform::Vercel => vercel::render(records)?,
        Platform::Nginx => nginx::render(records, ctx),
    };
    Ok(text)
}

/// One platform file written by an emit run.
#[derive(Debug)]
pub struct EmittedFile {
    pub platform: Platform,
    pub path: PathBuf,
    /// Records rendered.
    pub records: usize,
    /// Sources this platform can't express, left out of the file.
    pub unsupported: Vec<String>,
}

/// Files written by one emit run.
#[derive(Debug, Default)]
pub struct EmitSummary {
    pub written: Vec<EmittedFile>,
    /// Records dropped for an empty destination.
    pub skipped: usize,
}

/// Render and write every configured format.
pub fn run_emit(records: &[RedirectRecord], config: &EmitConfig, ctx: &EmitContext) -> Result<EmitSummary> {
    let (records, skipped) = emittable(records);
    let mut summary = EmitSummary {
        skipped,
        ..EmitSummary::default()
    };

    for &platform in &config.formats {
        let (kept, unsupported): (Vec<&RedirectRecord>, Vec<&RedirectRecord>) = records
            .iter()
            .copied()
            .partition(|record| expressible(platform, record));

        let text = render(platform, &kept, ctx)
            .with_context(|| format!("Failed to render {} redirects", platform.name()))?;
        let path = config.path_for(platform);
        write_atomic(&path, &text)?;

        summary.written.push(EmittedFile {
            platform,
            path,
            records: kept.len(),
            unsupported: unsupported.into_iter().map(|r| r.source.clone()).collect(),
        });
    }

    Ok(summary)
}
