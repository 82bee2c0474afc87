//! Vercel `vercel.json` redirects.
//!
//! ```json
//! { "redirects": [{ "source": "/old/", "destination": "/new/", "permanent": true }] }
//! ```
//!
//! Vercel only distinguishes permanent (308) from temporary (307), so any
//! code other than 301 maps to `permanent: false`.

use serde::Serialize;

use crate::core::RedirectRecord;

#[derive(Serialize)]
struct VercelConfig<'a> {
    redirects: Vec<VercelRedirect<'a>>,
}

#[derive(Serialize)]
struct VercelRedirect<'a> {
    source: &'a str,
    destination: &'a str,
    permanent: bool,
}

pub fn render(records: &[&RedirectRecord]) -> serde_json::Result<String> {
    let config = VercelConfig {
        redirects: records
            .iter()
            .map(|record| VercelRedirect {
                source: &record.source,
                destination: &record.destination,
                permanent: record.status.is_permanent(),
            })
            .collect(),
    };

    let mut json = serde_json::to_string_pretty(&config)?;
    json.push('\n');
    Ok(json)
}
