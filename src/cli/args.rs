//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::Platform;

/// Redirect table merger, validator and emitter for site migrations
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory [default: redirects.toml]
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub const DEFAULT_CONFIG: &'static str = "redirects.toml";

    /// Config file name to search for.
    pub fn config_name(&self) -> &Path {
        self.config
            .as_deref()
            .unwrap_or(Path::new(Self::DEFAULT_CONFIG))
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Merge ranked source tables into the redirect table
    #[command(visible_alias = "m")]
    Merge,

    /// Check the redirect table for duplicates, loops, chains and dead targets
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },

    /// Write platform redirect files from the redirect table
    #[command(visible_alias = "e")]
    Emit {
        #[command(flatten)]
        args: EmitArgs,
    },

    /// Merge, validate, then emit (stops before emitting on errors)
    #[command(visible_alias = "b")]
    Build {
        /// Treat chains and dead targets as errors
        #[arg(long)]
        strict: bool,
    },
}

/// Validate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Treat chains and dead targets as errors
    #[arg(long)]
    pub strict: bool,

    /// Print the report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Emit command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct EmitArgs {
    /// Platforms to generate (comma-separated, default: all configured)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<Platform>,

    /// Output directory (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}
