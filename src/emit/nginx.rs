//! nginx rules for an `include` inside a `server` block.
//!
//! ```nginx
//! # Generated by redirector on 2025-01-01
//! # 1 redirect
//! location = /old/ { return 301 /new/; }
//! ```

use std::borrow::Cow;

use super::EmitContext;
use crate::core::RedirectRecord;

pub fn render(records: &[&RedirectRecord], ctx: &EmitContext) -> String {
    let mut out = ctx.comment_header(records.len());
    for record in records {
        let code = if record.status.is_permanent() { 301 } else { 302 };
        out.push_str(&format!(
            "location = {} {{ return {code} {}; }}\n",
            quote(&record.source),
            quote(&record.destination)
        ));
    }
    out
}

/// Quote a token containing whitespace or nginx syntax characters.
fn quote(token: &str) -> Cow<'_, str> {
    let needs_quotes = token
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, ';' | '{' | '}' | '"' | '\'' | '#'));
    if needs_quotes {
        let escaped = token.replace('\\', "\\\\").replace('"', "\\\"");
        Cow::Owned(format!("\"{escaped}\""))
    } else {
        Cow::Borrowed(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StatusCode;
    use crate::utils::date::DateTimeUtc;

    #[test]
    fn test_render() {
        let records = [
            RedirectRecord::new("/old/", "/new/", StatusCode::PERMANENT),
            RedirectRecord::new("/tmp", "https://example.com/x", StatusCode::TEMPORARY),
            RedirectRecord::new("/see", "/other/", StatusCode::new(303).unwrap()),
        ];
        let refs: Vec<_> = records.iter().collect();
        let ctx = EmitContext::new(DateTimeUtc::from_ymd(2025, 6, 1));

        assert_eq!(
            render(&refs, &ctx),
            concat!(
                "# Generated by redirector on 2025-06-01\n",
                "# 3 redirects\n",
                "location = /old/ { return 301 /new/; }\n",
                "location = /tmp { return 302 https://example.com/x; }\n",
                "location = /see { return 302 /other/; }\n",
            )
        );
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("/plain/"), "/plain/");
        assert_eq!(quote("/with space"), "\"/with space\"");
        assert_eq!(quote("/a;b"), "\"/a;b\"");
        assert_eq!(quote("/page#top"), "\"/page#top\"");
    }
}
