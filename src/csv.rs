//! Comma-separated table codec.
//!
//! Reading is lenient by construction:
//! - A quote toggles the in-quotes state; commas and line breaks inside
//!   quotes are literal. A doubled quote inside quotes is a literal quote.
//! - Unquoted fields are trimmed; quoted fields keep their exact content.
//! - Rows shorter than the header read missing fields as `""`.
//! - Blank lines are ignored, a leading UTF-8 BOM and CRLF are accepted.
//!
//! Writing quotes only where needed, except for fields the caller forces.

use std::borrow::Cow;

/// A parsed table: header names plus raw rows.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Parse delimited text. The first non-blank line is the header row.
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines = split_records(text).into_iter();

        let headers = lines
            .next()
            .map(|h| h.into_iter().map(|s| s.trim().to_string()).collect())
            .unwrap_or_default();

        Self {
            headers,
            rows: lines.collect(),
        }
    }

    #[cfg(test)]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if a column exists (header names are matched exactly).
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Iterate rows with by-name field access.
    pub fn rows(&self) -> impl Iterator<Item = CsvRow<'_>> {
        self.rows.iter().map(|fields| CsvRow {
            headers: &self.headers,
            fields,
        })
    }
}

/// A single row borrowed from a [`CsvTable`].
#[derive(Debug, Clone, Copy)]
pub struct CsvRow<'a> {
    headers: &'a [String],
    fields: &'a [String],
}

impl<'a> CsvRow<'a> {
    /// Get a field by column name. Missing columns and short rows yield `""`.
    pub fn get(&self, column: &str) -> &'a str {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|idx| self.fields.get(idx))
            .map_or("", String::as_str)
    }
}

/// Field being read; `quoted` once an opening quote was seen.
#[derive(Default)]
struct FieldBuf {
    text: String,
    quoted: bool,
}

impl FieldBuf {
    fn take(&mut self) -> String {
        let field = std::mem::take(self);
        if field.quoted {
            field.text
        } else {
            field.text.trim().to_string()
        }
    }
}

/// Split text into records of fields, honoring quotes across line breaks.
fn split_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = FieldBuf::default();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                field.text.push('"');
            }
            '"' if in_quotes => in_quotes = false,
            '"' => {
                // Padding before the opening quote is not content
                if !field.quoted && field.text.trim().is_empty() {
                    field.text.clear();
                }
                field.quoted = true;
                in_quotes = true;
            }
            ',' if !in_quotes => record.push(field.take()),
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            '\n' if !in_quotes => {
                record.push(field.take());
                push_record(&mut records, std::mem::take(&mut record));
            }
            // Padding after the closing quote
            c if field.quoted && !in_quotes && c.is_whitespace() => {}
            _ => field.text.push(c),
        }
    }

    // Last line without trailing newline
    if !field.text.is_empty() || field.quoted || !record.is_empty() {
        record.push(field.take());
        push_record(&mut records, record);
    }

    records
}

/// Keep a record unless it is a blank line.
fn push_record(records: &mut Vec<Vec<String>>, record: Vec<String>) {
    let blank = record.len() == 1 && record[0].trim().is_empty();
    if !blank {
        records.push(record);
    }
}

/// Escape a field, quoting only when it contains a comma, quote or line break,
/// or has edge whitespace the reader would trim.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) || field.trim() != field {
        Cow::Owned(quote_field(field))
    } else {
        Cow::Borrowed(field)
    }
}

/// Always quote a field, doubling internal quotes.
pub fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
