//! The redirect record: one source → destination rule.

use serde::Serialize;

use super::StatusCode;
use crate::utils::route::is_external_link;

/// A single redirect rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectRecord {
    /// Site-relative path or pattern. The graph node identifier.
    pub source: String,
    /// Site-relative path or absolute external URL.
    pub destination: String,
    /// Redirect status code.
    pub status: StatusCode,
    /// Free-text rationale, may be empty.
    pub note: String,
    /// Name of the input source that contributed this record.
    ///
    /// Not persisted: records read from the artifact have none.
    #[serde(skip)]
    pub provenance: Option<String>,
}

impl RedirectRecord {
    pub fn new(source: impl Into<String>, destination: impl Into<String>, status: StatusCode) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            status,
            note: String::new(),
            provenance: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_provenance(mut self, provenance: impl Into<String>) -> Self {
        self.provenance = Some(provenance.into());
        self
    }

    /// Destination is an absolute URL (exempt from graph checks).
    #[inline]
    pub fn is_external(&self) -> bool {
        is_external_link(&self.destination)
    }
}
