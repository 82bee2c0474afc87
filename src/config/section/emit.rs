//! `[emit]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [emit]
//! output = "dist"                          # Output directory (relative to project root)
//! formats = ["netlify", "vercel", "nginx"] # Platforms to generate
//! netlify = "_redirects"                   # File names inside `output`
//! vercel = "vercel.json"
//! nginx = "nginx-redirects.conf"
//! ```

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitConfig {
    /// Output directory for platform files.
    pub output: PathBuf,

    /// Platforms to generate.
    pub formats: Vec<Platform>,

    /// Netlify rule list file name.
    pub netlify: PathBuf,

    /// Vercel config file name.
    pub vercel: PathBuf,

    /// nginx include file name.
    pub nginx: PathBuf,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dist"),
            formats: Platform::ALL.to_vec(),
            netlify: PathBuf::from("_redirects"),
            vercel: PathBuf::from("vercel.json"),
            nginx: PathBuf::from("nginx-redirects.conf"),
        }
    }
}

/// Target hosting platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Netlify `_redirects` rule list.
    Netlify,
    /// Vercel `vercel.json` redirects array.
    Vercel,
    /// nginx `location` rules.
    Nginx,
}

impl Platform {
    pub const ALL: [Self; 3] = [Self::Netlify, Self::Vercel, Self::Nginx];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Netlify => "netlify",
            Self::Vercel => "vercel",
            Self::Nginx => "nginx",
        }
    }
}

impl EmitConfig {
    pub const FORMATS: FieldPath = FieldPath::new("emit.formats");

    pub(crate) fn normalize(&mut self, root: &Path) {
        self.output = root.join(&self.output);
    }

    /// Output file for a platform.
    pub fn path_for(&self, platform: Platform) -> PathBuf {
        let name = match platform {
            Platform::Netlify => &self.netlify,
            Platform::Vercel => &self.vercel,
            Platform::Nginx => &self.nginx,
        };
        self.output.join(name)
    }

    /// Validate `[emit]` values.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for format in &self.formats {
            if !seen.insert(*format) {
                diag.error(
                    Self::FORMATS,
                    format!("duplicate format `{}`", format.name()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_emit_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.emit.formats, Platform::ALL);
        assert_eq!(config.emit.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_emit_custom() {
        let config = test_parse_config(
            r#"[emit]
output = "public"
formats = ["vercel"]
vercel = "config/vercel.json""#,
        );
        assert_eq!(config.emit.formats, [Platform::Vercel]);
        assert_eq!(
            config.emit.path_for(Platform::Vercel),
            PathBuf::from("public/config/vercel.json")
        );
        assert_eq!(
            config.emit.path_for(Platform::Netlify),
            PathBuf::from("public/_redirects")
        );
    }

    #[test]
    fn test_emit_duplicate_format() {
        let emit = EmitConfig {
            formats: vec![Platform::Nginx, Platform::Nginx],
            ..EmitConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        emit.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
