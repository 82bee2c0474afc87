//! Config loading errors and setting diagnostics.
//!
//! Loading fails when an explicit `--config` file is missing, the file
//! can't be read or is not valid TOML, or its settings are inconsistent. Setting problems are
//! collected into [`ConfigDiagnostics`] so every bad field is reported in a
//! single run instead of one per invocation.

use std::fmt;
use std::io;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use super::FieldPath;
use crate::utils::plural_count;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file `{}` not found", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read `{}`", .0.display())]
    Io(PathBuf, #[source] io::Error),

    #[error("invalid TOML")]
    Parse(#[from] toml::de::Error),

    // Rendered in full by Display, so no #[source]
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

/// One rejected setting.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Attach a fix suggestion.
    pub fn hint(&mut self, hint: impl Into<String>) -> &mut Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", "×".red(), self.field.as_str().cyan(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n    {} {}", "help:".bright_green(), hint)?;
        }
        Ok(())
    }
}

/// Rejected settings collected across every section.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    items: Vec<Diagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject `field`. Chain [`Diagnostic::hint`] to suggest a fix.
    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) -> &mut Diagnostic {
        self.items.push(Diagnostic {
            field,
            message: message.into(),
            hint: None,
        });
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// `Ok` when nothing was rejected.
    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(self))
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format!("{} in config", plural_count(self.len(), "invalid setting")).bold()
        )?;
        for item in &self.items {
            write!(f, "\n  {item}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_io_error_names_file() {
        let err = ConfigError::Io(
            PathBuf::from("redirects.toml"),
            io::Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "cannot read `redirects.toml`");
    }

    #[test]
    fn test_hint_chaining() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("site.url"), "not a url")
            .hint("use https://...");
        diag.error(FieldPath::new("emit.formats"), "duplicate format `vercel`");

        let items: Vec<_> = diag.iter().collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].hint.as_deref(), Some("use https://..."));
        assert_eq!(items[1].hint, None);
    }

    #[test]
    fn test_into_result() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());

        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("merge.sources"), "empty");
        assert!(matches!(diag.into_result(), Err(ConfigError::Invalid(d)) if d.len() == 1));
    }

    #[test]
    fn test_display_lists_every_setting() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("merge.sources"), "at least one source table is required");
        diag.error(FieldPath::new("emit.formats"), "duplicate format `vercel`")
            .hint("list each platform once");

        let text = diag.to_string();
        assert!(text.contains("2 invalid settings"));
        assert!(text.contains("merge.sources"));
        assert!(text.contains("duplicate format `vercel`"));
        assert!(text.contains("list each platform once"));
    }
}
