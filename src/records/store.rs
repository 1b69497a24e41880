//! In-memory record store.

use super::filter::{filter_records, FilterCriteria};
use super::regions::RegionTable;
use super::schema::TransactionRecord;
use log::debug;
use std::collections::HashSet;

/// Owned set of transaction records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<TransactionRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records satisfying an arbitrary predicate, in order
    pub fn filter_by<P>(&self, predicate: P) -> RecordStore
    where
        P: Fn(&TransactionRecord) -> bool,
    {
        Self::new(self.iter().filter(|r| predicate(r)).cloned().collect())
    }

    /// Independent copy holding only the records matching `criteria`
    pub fn apply(&self, criteria: &FilterCriteria, regions: &RegionTable) -> RecordStore {
        let filtered = filter_records(&self.records, criteria, regions);
        debug!(
            "Filter kept {} of {} records ({:?})",
            filtered.len(),
            self.records.len(),
            criteria
        );
        Self::new(filtered)
    }

    /// Distinct sellers in order of first appearance
    pub fn sellers(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.iter()
            .map(|r| r.seller.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }
}

impl From<Vec<TransactionRecord>> for RecordStore {
    fn from(records: Vec<TransactionRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
