//! Command-line interface module.

mod args;
pub mod build;
pub mod emit;
pub mod merge;
pub mod validate;

pub use args::{Cli, Commands};
#[cfg(test)]
pub use args::{EmitArgs, ValidateArgs};
