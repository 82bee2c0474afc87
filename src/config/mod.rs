//! `redirects.toml` loading.
//!
//! ```text
//! config/
//! ├── section/   [site] [merge] [validate] [emit]
//! ├── types/     ConfigError, ConfigDiagnostics, FieldPath
//! └── util.rs    upward config file search
//! ```
//!
//! [`RedirectConfig::load`] runs once per invocation: find the file, parse
//! it, anchor relative paths at the project root, fold in command flags and
//! check every section. The result is passed by reference to each stage.

pub mod section;
pub mod types;
mod util;

pub use section::{
    EmitConfig, MergeConfig, Platform, SiteSectionConfig, SourceConfig, SourceKind,
    ValidateConfig, ValidateLevel,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, Commands};
use crate::{debug, log};
use util::find_config_file;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedirectConfig {
    /// Config file in use; empty when running on defaults.
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative paths resolve against.
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub merge: MergeConfig,

    #[serde(default)]
    pub validate: ValidateConfig,

    #[serde(default)]
    pub emit: EmitConfig,
}

impl RedirectConfig {
    /// Resolve the configuration for this invocation.
    ///
    /// Without a config file, defaults apply and the current directory is
    /// the project root. A `--config` that can't be found is an error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine current directory")?;

        let mut config = if let Some(path) = Self::locate(cli, &cwd)? {
            debug!("config"; "using {}", path.display());
            Self::read(&path)?
        } else {
            debug!("config"; "no {} found, using defaults", cli.config_name().display());
            Self {
                root: cwd,
                ..Self::default()
            }
        };

        config.finalize(cli);
        config.validate()?;
        Ok(config)
    }

    /// Find the config file, searching upward from `cwd`.
    fn locate(cli: &Cli, cwd: &Path) -> Result<Option<PathBuf>, ConfigError> {
        let name = cli.config_name();
        match find_config_file(name, cwd) {
            Some(path) => Ok(Some(path)),
            None if cli.config.is_some() => Err(ConfigError::NotFound(name.to_path_buf())),
            None => Ok(None),
        }
    }

    /// Parse a config file, warning about keys nothing reads.
    fn read(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let (mut config, unknown) = Self::parse_tracking_unknown(&text)
            .with_context(|| format!("cannot load {}", path.display()))?;

        if !unknown.is_empty() {
            log!("warning"; "ignoring unknown keys in {}: {}", path.display(), unknown.join(", "));
        }

        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Parse TOML text, returning the dotted paths of unrecognized keys.
    fn parse_tracking_unknown(text: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut unknown = Vec::new();
        let config = serde_ignored::deserialize(toml::Deserializer::new(text), |key: serde_ignored::Path<'_>| {
            unknown.push(key.to_string());
        })?;
        Ok((config, unknown))
    }

    fn finalize(&mut self, cli: &Cli) {
        let root = self.root.clone();
        self.site.normalize(&root);
        self.merge.normalize(&root);
        self.emit.normalize(&root);
        self.apply_flags(cli);
    }

    /// Command flags override file settings.
    fn apply_flags(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Merge => {}
            Commands::Validate { args } if args.strict => self.validate.make_strict(),
            Commands::Validate { .. } => {}
            Commands::Emit { args } => {
                if let Some(dir) = &args.output {
                    self.emit.output = self.root.join(dir);
                }
                if !args.only.is_empty() {
                    self.emit.formats.clone_from(&args.only);
                }
            }
            Commands::Build { strict } if *strict => self.validate.make_strict(),
            Commands::Build { .. } => {}
        }
    }

    /// Check every section, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.merge.validate(&mut diag);
        self.emit.validate(&mut diag);
        diag.into_result()?;
        Ok(())
    }

    /// Shorten `path` for display when it lies under the project root.
    pub fn root_relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// Parse a TOML snippet, failing the test on any unknown key.
#[cfg(test)]
pub fn test_parse_config(toml: &str) -> RedirectConfig {
    let (config, unknown) = RedirectConfig::parse_tracking_unknown(toml).unwrap();
    assert!(unknown.is_empty(), "unknown keys in test config: {unknown:?}");
    config
}
