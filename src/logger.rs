//! Stage-prefixed terminal output.
//!
//! Every line goes to stderr as `[stage] message`, leaving stdout to
//! `validate --json`. The prefix color tells stages apart at a glance:
//!
//! ```ignore
//! log!("merge"; "wrote {}", plural_count(n, "redirect"));
//! debug!("validate"; "{} site paths", site.len());   // --verbose only
//! ```

use std::fmt::Arguments;
use std::io::{Write, stderr};
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::{OwoColorize, Style};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable `debug!` output (`--verbose`).
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Print `[stage] message` to stderr.
#[macro_export]
macro_rules! log {
    ($stage:expr; $($arg:tt)*) => {
        $crate::logger::write_line($stage, format_args!($($arg)*))
    };
}

/// Like [`log!`], but only with `--verbose`.
#[macro_export]
macro_rules! debug {
    ($stage:expr; $($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            $crate::logger::write_line($stage, format_args!($($arg)*))
        }
    };
}

pub fn write_line(stage: &str, message: Arguments<'_>) {
    let prefix = format!("[{stage}]");
    let mut out = stderr().lock();
    writeln!(out, "{} {message}", prefix.style(stage_style(stage))).ok();
}

fn stage_style(stage: &str) -> Style {
    let style = Style::new().bold();
    match stage {
        "merge" => style.bright_blue(),
        "validate" => style.bright_magenta(),
        "emit" => style.bright_green(),
        "error" => style.bright_red(),
        "hint" => style.bright_cyan(),
        _ => style.bright_yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_keeps_stage_name() {
        let prefix = "[emit]".style(stage_style("emit")).to_string();
        assert!(prefix.contains("[emit]"));
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
