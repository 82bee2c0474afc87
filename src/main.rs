//! redirector - redirect table merger, validator and emitter for site migrations.
//!
//! Stages communicate only through the persisted redirect table:
//!
//! ```text
//! seed.csv ─┐
//!           ├─ merge ─> redirects.csv ─┬─ validate ─> report
//! coverage ─┘                          └─ emit ─> _redirects, vercel.json, nginx
//! ```

mod cli;
mod config;
mod core;
mod csv;
mod emit;
mod logger;
mod merge;
mod utils;
mod validate;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::RedirectConfig;
use utils::date::DateTimeUtc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = RedirectConfig::load(&cli)?;

    match &cli.command {
        Commands::Merge => cli::merge::merge_redirects(&config).map(|_| ()),
        Commands::Validate { args } => cli::validate::validate_redirects(&config, args.json),
        Commands::Emit { .. } => cli::emit::emit_redirects(&config, DateTimeUtc::now()),
        Commands::Build { .. } => cli::build::build_all(&config, DateTimeUtc::now()),
    }
}
