//! Netlify `_redirects` rule list.
//!
//! ```text
//! # Generated by redirector on 2025-01-01
//! # 2 redirects
//! /old/  /new/    301
//! /tmp   /later/  302
//! ```
//!
//! Fields are whitespace-delimited, so a source or destination containing
//! whitespace can't be written.

use super::EmitContext;
use crate::core::RedirectRecord;

/// Render the rule list with source and destination columns aligned.
pub fn render(records: &[&RedirectRecord], ctx: &EmitContext) -> String {
    let source_width = column_width(records.iter().map(|r| r.source.as_str()));
    let destination_width = column_width(records.iter().map(|r| r.destination.as_str()));

    let mut out = ctx.comment_header(records.len());
    for record in records {
        out.push_str(&format!(
            "{:<source_width$}  {:<destination_width$}  {}\n",
            record.source, record.destination, record.status
        ));
    }
    out
}

/// Whether the record fits the whitespace-delimited rule format.
pub fn expressible(record: &RedirectRecord) -> bool {
    !record.source.contains(char::is_whitespace) && !record.destination.contains(char::is_whitespace)
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0)
}
