//! Redirect graph validator.
//!
//! Classifies defects in the persisted record list:
//!
//! | Check      | Level                      |
//! |------------|----------------------------|
//! | duplicates | error                      |
//! | loops      | error                      |
//! | cycles     | error (`[validate] cycles`)|
//! | chains     | `[validate.chains] level`  |
//! | targets    | `[validate.targets] level` |
//!
//! External destinations are never graph nodes, so they cannot form chains,
//! loops or cycles and are never checked against the site paths.

mod graph;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::config::{ValidateConfig, ValidateLevel};
use crate::core::{RedirectRecord, SitePathSet};

use graph::RedirectGraph;

/// A source that appears more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateSource {
    pub source: String,
    pub first_destination: String,
    pub conflicting_destination: String,
}

/// `a → b → a`, or `a → a` when both are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectLoop {
    pub a: String,
    pub b: String,
}

/// A cycle of three or more sources, starting at its smallest node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectCycle {
    pub path: Vec<String>,
}

/// `source → via → suggested`, collapsible to `source → suggested`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectChain {
    pub source: String,
    pub via: String,
    pub suggested: String,
    /// Where the chain finally lands; `None` when it runs into a cycle.
    pub terminal: Option<String>,
}

/// A site-relative destination that is not a live path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidTarget {
    pub source: String,
    pub destination: String,
}

/// Validation findings for one record list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Records checked (duplicates included).
    pub records: usize,
    pub duplicates: Vec<DuplicateSource>,
    pub loops: Vec<RedirectLoop>,
    pub cycles: Vec<RedirectCycle>,
    pub chains: Vec<RedirectChain>,
    pub targets: Vec<InvalidTarget>,
    pub chain_level: ValidateLevel,
    pub target_level: ValidateLevel,
    /// Target check enabled but no site paths configured.
    pub targets_skipped: bool,
}

impl ValidationReport {
    /// Findings that fail validation.
    pub fn error_count(&self) -> usize {
        let mut count = self.duplicates.len() + self.loops.len() + self.cycles.len();
        if self.chain_level == ValidateLevel::Error {
            count += self.chains.len();
        }
        if self.target_level == ValidateLevel::Error {
            count += self.targets.len();
        }
        count
    }

    /// Advisory findings.
    pub fn warning_count(&self) -> usize {
        let mut count = 0;
        if self.chain_level == ValidateLevel::Warn {
            count += self.chains.len();
        }
        if self.target_level == ValidateLevel::Warn {
            count += self.targets.len();
        }
        count
    }

    #[inline]
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }
}

/// Run every enabled check over `records`.
pub fn validate(
    records: &[RedirectRecord],
    site: &SitePathSet,
    config: &ValidateConfig,
) -> ValidationReport {
    let (graph, duplicates) = RedirectGraph::build(records);

    let mut report = ValidationReport {
        records: records.len(),
        duplicates,
        chain_level: config.chains.level,
        target_level: config.targets.level,
        ..ValidationReport::default()
    };

    let on_cycle = detect_cycles(&graph, config.cycles, &mut report);
    detect_chains(&graph, &on_cycle, &mut report);

    if config.targets.enable {
        if site.is_empty() {
            report.targets_skipped = true;
        } else {
            detect_invalid_targets(&graph, site, &mut report);
        }
    }

    report
}

/// Record loops (always) and longer cycles (when enabled).
///
/// Returns the sources lying on a reported long cycle.
fn detect_cycles<'a>(
    graph: &RedirectGraph<'a>,
    long_cycles: bool,
    report: &mut ValidationReport,
) -> FxHashSet<&'a str> {
    let mut on_cycle = FxHashSet::default();

    for cycle in graph.cycles() {
        match cycle.as_slice() {
            [a] => report.loops.push(RedirectLoop {
                a: a.to_string(),
                b: a.to_string(),
            }),
            [a, b] => report.loops.push(RedirectLoop {
                a: a.to_string(),
                b: b.to_string(),
            }),
            _ if long_cycles => {
                on_cycle.extend(cycle.iter().copied());
                report.cycles.push(RedirectCycle {
                    path: cycle.iter().map(|n| n.to_string()).collect(),
                });
            }
            _ => {}
        }
    }

    on_cycle
}

fn detect_chains(graph: &RedirectGraph<'_>, on_cycle: &FxHashSet<&str>, report: &mut ValidationReport) {
    for record in graph.edges() {
        let source = record.source.as_str();
        if on_cycle.contains(source) {
            continue;
        }
        let Some(via) = graph.next(source) else {
            continue;
        };
        let Some(hop) = graph.get(via) else {
            continue;
        };

        let suggested = hop.destination.as_str();
        // `via → source` is a loop; `via → via` collapses to nothing
        if suggested == source || suggested == via {
            continue;
        }

        report.chains.push(RedirectChain {
            source: source.to_string(),
            via: via.to_string(),
            suggested: suggested.to_string(),
            terminal: graph.terminal(suggested, &[source, via]).map(str::to_string),
        });
    }
}

fn detect_invalid_targets(graph: &RedirectGraph<'_>, site: &SitePathSet, report: &mut ValidationReport) {
    for record in graph.edges() {
        if record.is_external() || site.contains(&record.destination) {
            continue;
        }
        report.targets.push(InvalidTarget {
            source: record.source.clone(),
            destination: record.destination.clone(),
        });
    }
}
