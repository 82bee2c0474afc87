//! The merged redirect table.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use super::RedirectRecord;

/// Redirect records keyed by source path.
///
/// Invariants:
/// - No two records share a `source` (first insert wins)
/// - Iteration is lexicographic by `source`
#[derive(Debug, Clone, Default)]
pub struct RedirectTable {
    records: BTreeMap<String, RedirectRecord>,
}

impl RedirectTable {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless its source is already present.
    ///
    /// Returns `false` when an earlier record keeps the slot.
    pub fn insert(&mut self, record: RedirectRecord) -> bool {
        match self.records.entry(record.source.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    pub fn get(&self, source: &str) -> Option<&RedirectRecord> {
        self.records.get(source)
    }

    #[cfg(test)]
    pub fn contains(&self, source: &str) -> bool {
        self.records.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in source order.
    pub fn iter(&self) -> impl Iterator<Item = &RedirectRecord> {
        self.records.values()
    }

    /// Owned records in source order.
    #[cfg(test)]
    pub fn into_records(self) -> Vec<RedirectRecord> {
        self.records.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a RedirectTable {
    type Item = &'a RedirectRecord;
    type IntoIter = std::collections::btree_map::Values<'a, String, RedirectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
