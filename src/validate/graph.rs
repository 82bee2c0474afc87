//! Redirect graph: one outgoing edge per source.
//!
//! Built from the artifact's record list. The first record for a source
//! owns the edge; later ones are collected as duplicates.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::RedirectRecord;

use super::DuplicateSource;

#[derive(Debug, Default)]
pub struct RedirectGraph<'a> {
    /// First-seen records in file order.
    edges: Vec<&'a RedirectRecord>,
    index: FxHashMap<&'a str, &'a RedirectRecord>,
}

impl<'a> RedirectGraph<'a> {
    /// Build the graph, returning duplicate sources alongside it.
    pub fn build(records: &'a [RedirectRecord]) -> (Self, Vec<DuplicateSource>) {
        let mut graph = Self::default();
        let mut duplicates = Vec::new();

        for record in records {
            match graph.index.get(record.source.as_str()) {
                Some(first) => duplicates.push(DuplicateSource {
                    source: record.source.clone(),
                    first_destination: first.destination.clone(),
                    conflicting_destination: record.destination.clone(),
                }),
                None => {
                    graph.index.insert(&record.source, record);
                    graph.edges.push(record);
                }
            }
        }

        (graph, duplicates)
    }

    /// First-seen records in file order.
    pub fn edges(&self) -> impl Iterator<Item = &'a RedirectRecord> + '_ {
        self.edges.iter().copied()
    }

    pub fn get(&self, source: &str) -> Option<&'a RedirectRecord> {
        self.index.get(source).copied()
    }

    /// Next node after `node`, if `node` is a source with a site-relative
    /// destination.
    pub fn next(&self, node: &str) -> Option<&'a str> {
        self.get(node)
            .filter(|record| !record.is_external())
            .map(|record| record.destination.as_str())
    }

    /// Follow destinations from `start` to the end of the path.
    ///
    /// Returns the first node that is not a source (or is an external url),
    /// or `None` when the walk revisits a node or any of `seen`.
    pub fn terminal(&self, start: &'a str, seen: &[&str]) -> Option<&'a str> {
        let mut visited: FxHashSet<&str> = seen.iter().copied().collect();
        let mut node = start;
        loop {
            let Some(record) = self.get(node) else {
                return Some(node);
            };
            if !visited.insert(node) {
                return None;
            }
            node = &record.destination;
            if record.is_external() {
                return Some(node);
            }
        }
    }

    /// Find every cycle, each exactly once, rotated to start at its smallest node.
    ///
    /// Self-redirects come back as one-node cycles and two-node loops as
    /// two-node cycles.
    pub fn cycles(&self) -> Vec<Vec<&'a str>> {
        let mut state: FxHashMap<&str, Visit> = FxHashMap::default();
        let mut cycles = Vec::new();

        for &record in &self.edges {
            let mut path: Vec<&'a str> = Vec::new();
            let mut node: &'a str = &record.source;

            loop {
                match state.get(node) {
                    Some(Visit::Done) => break,
                    Some(Visit::OnPath) => {
                        if let Some(pos) = path.iter().position(|n| *n == node) {
                            cycles.push(rotate_to_min(&path[pos..]));
                        }
                        break;
                    }
                    None => {}
                }

                state.insert(node, Visit::OnPath);
                path.push(node);

                match self.next(node) {
                    Some(next) if self.index.contains_key(next) => node = next,
                    _ => break,
                }
            }

            for node in path {
                state.insert(node, Visit::Done);
            }
        }

        cycles
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    OnPath,
    Done,
}

fn rotate_to_min<'a>(cycle: &[&'a str]) -> Vec<&'a str> {
    let start = cycle
        .iter()
        .enumerate()
        .min_by_key(|(_, node)| **node)
        .map_or(0, |(i, _)| i);
    cycle[start..].iter().chain(&cycle[..start]).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StatusCode;

    fn records(edges: &[(&str, &str)]) -> Vec<RedirectRecord> {
        edges
            .iter()
            .map(|(from, to)| RedirectRecord::new(*from, *to, StatusCode::PERMANENT))
            .collect()
    }

    #[test]
    fn test_first_seen_edge_kept() {
        let records = records(&[("/a", "/b/"), ("/a", "/c/")]);
        let (graph, duplicates) = RedirectGraph::build(&records);

        assert_eq!(graph.next("/a"), Some("/b/"));
        assert_eq!(graph.edges().count(), 1);
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].first_destination, "/b/");
        assert_eq!(duplicates[0].conflicting_destination, "/c/");
    }

    #[test]
    fn test_next_skips_external() {
        let records = records(&[("/a", "https://example.com/a")]);
        let (graph, _) = RedirectGraph::build(&records);
        assert_eq!(graph.next("/a"), None);
        assert_eq!(graph.next("/missing"), None);
    }

    #[test]
    fn test_terminal() {
        let records = records(&[
            ("/a", "/b"),
            ("/b", "/c"),
            ("/c", "/d"),
            ("/x", "/y"),
            ("/y", "https://example.com/"),
            ("/p", "/q"),
            ("/q", "/p"),
        ]);
        let (graph, _) = RedirectGraph::build(&records);

        assert_eq!(graph.terminal("/a", &[]), Some("/d"));
        assert_eq!(graph.terminal("/d", &[]), Some("/d"));
        assert_eq!(graph.terminal("/x", &[]), Some("https://example.com/"));
        assert_eq!(graph.terminal("/p", &[]), None);
        assert_eq!(graph.terminal("/b", &["/b"]), None);
    }

    #[test]
    fn test_cycles_found_once() {
        let records = records(&[
            ("/c", "/a"),
            ("/a", "/b"),
            ("/b", "/c"),
            ("/entry", "/a"),
            ("/self", "/self"),
            ("/x", "/y"),
            ("/y", "/x"),
        ]);
        let (graph, _) = RedirectGraph::build(&records);

        let mut cycles = graph.cycles();
        cycles.sort();
        assert_eq!(
            cycles,
            vec![vec!["/a", "/b", "/c"], vec!["/self"], vec!["/x", "/y"]]
        );
    }

    #[test]
    fn test_acyclic() {
        let records = records(&[("/a", "/b"), ("/b", "/c"), ("/d", "/b")]);
        let (graph, _) = RedirectGraph::build(&records);
        assert!(graph.cycles().is_empty());
    }

    #[test]
    fn test_rotate_to_min() {
        assert_eq!(rotate_to_min(&["/c", "/a", "/b"]), ["/a", "/b", "/c"]);
        assert_eq!(rotate_to_min(&["/a"]), ["/a"]);
    }
}
