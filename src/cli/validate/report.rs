//! Validation report formatting.

use std::fmt;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::config::ValidateLevel;
use crate::utils::{plural_count, plural_s};
use crate::validate::ValidationReport;

impl ValidationReport {
    /// Print the full report to stderr (errors first, then advisories).
    pub fn print(&self) {
        print_section(
            "duplicates",
            ValidateLevel::Error,
            self.duplicates.iter().map(|d| {
                (
                    d.source.as_str(),
                    vec![
                        format!("{} {}", d.first_destination, "(kept)".dimmed()),
                        format!("{} {}", d.conflicting_destination, "(conflict)".dimmed()),
                    ],
                )
            }),
        );
        print_section(
            "loops",
            ValidateLevel::Error,
            self.loops.iter().map(|l| {
                let line = if l.a == l.b {
                    format!("{} → {}", l.a, l.a)
                } else {
                    format!("{} → {} → {}", l.a, l.b, l.a)
                };
                (l.a.as_str(), vec![line])
            }),
        );
        print_section(
            "cycles",
            ValidateLevel::Error,
            self.cycles.iter().filter_map(|c| {
                let first = c.path.first()?;
                Some((first.as_str(), vec![format!("{} → {}", c.path.join(" → "), first)]))
            }),
        );
        print_section(
            "chains",
            self.chain_level,
            self.chains.iter().map(|c| {
                let mut line = format!(
                    "{} → {} {}",
                    c.via,
                    c.suggested,
                    format!("(collapse to {} → {})", c.source, c.suggested).dimmed()
                );
                match &c.terminal {
                    Some(terminal) if terminal != &c.suggested => {
                        line.push_str(&format!(" (ends at {terminal})"));
                    }
                    Some(_) => {}
                    None => line.push_str(" (runs into a cycle)"),
                }
                (c.source.as_str(), vec![line])
            }),
        );
        print_section(
            "targets",
            self.target_level,
            self.targets.iter().map(|t| {
                let destination = if t.destination.is_empty() {
                    "(empty)"
                } else {
                    t.destination.as_str()
                };
                (t.source.as_str(), vec![format!("{destination} is not a site path")])
            }),
        );
    }
}

/// Print one section: header with count, then `[source]` and `→` lines.
fn print_section<'a>(
    name: &str,
    level: ValidateLevel,
    findings: impl Iterator<Item = (&'a str, Vec<String>)>,
) {
    let findings: Vec<_> = findings.collect();
    if findings.is_empty() {
        return;
    }
    eprintln!();

    let count = findings.len();
    let (kind, header) = match level {
        ValidateLevel::Error => ("error", name.red().bold().to_string()),
        ValidateLevel::Warn => ("warning", name.yellow().bold().to_string()),
    };
    eprintln!(
        "{} {}",
        header,
        format!("({count} {kind}{})", plural_s(count)).dimmed()
    );

    for (source, lines) in findings {
        eprintln!("{}{}{}", "[".dimmed(), source.cyan(), "]".dimmed());
        for line in lines {
            match level {
                ValidateLevel::Error => eprintln!("{} {}", "→".red(), line),
                ValidateLevel::Warn => eprintln!("{} {}", "→".yellow(), line),
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.error_count();
        let warnings = self.warning_count();

        match (errors, warnings) {
            (0, 0) => write!(
                f,
                "{} ({})",
                "all checks passed".green(),
                plural_count(self.records, "redirect")
            ),
            (0, _) => write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                warnings.to_string().yellow().bold(),
                format!("warning{}", plural_s(warnings)).dimmed()
            ),
            _ => {
                write!(
                    f,
                    "{} {} {}",
                    "found".dimmed(),
                    errors.to_string().red().bold(),
                    format!("error{}", plural_s(errors)).dimmed()
                )?;
                if warnings > 0 {
                    write!(f, "{}", format!(", {}", plural_count(warnings, "warning")).dimmed())?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    errors: usize,
    warnings: usize,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

/// Machine-readable report for `--json`.
pub fn to_json(report: &ValidationReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        passed: report.passed(),
        errors: report.error_count(),
        warnings: report.warning_count(),
        report,
    })
}
