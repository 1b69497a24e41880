//! Generic group-by-sum/count engine.
//!
//! One pass over the records; each record's price and a unit count are
//! accumulated into the bucket of its key. Buckets are created on first
//! sight and kept in key order.

use super::dimension::Dimension;
use super::metrics::Metrics;
use crate::records::TransactionRecord;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key to metrics mapping for one dimension
pub type Aggregates<K> = BTreeMap<K, Metrics>;

/// One group of one dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRow<K> {
    pub key: K,

    #[serde(flatten)]
    pub metrics: Metrics,
}

impl<K> AggregateRow<K> {
    pub fn new(key: K, metrics: Metrics) -> Self {
        Self { key, metrics }
    }
}

/// Aggregate with an arbitrary key function
pub fn aggregate_by<'a, K, F>(
    records: impl IntoIterator<Item = &'a TransactionRecord>,
    key_fn: F,
) -> Aggregates<K>
where
    K: Ord,
    F: Fn(&TransactionRecord) -> K,
{
    let mut groups: Aggregates<K> = BTreeMap::new();
    for record in records {
        groups.entry(key_fn(record)).or_default().record(record.price);
    }
    groups
}

/// Aggregate along a [`Dimension`]
pub fn aggregate<'a, D: Dimension>(
    records: impl IntoIterator<Item = &'a TransactionRecord>,
    dimension: &D,
) -> Aggregates<D::Key> {
    let groups = aggregate_by(records, |r| dimension.key(r));
    debug!("Aggregated {} {} groups", groups.len(), D::NAME);
    groups
}

/// Rows in key order
pub fn to_rows<K: Clone>(aggregates: &Aggregates<K>) -> Vec<AggregateRow<K>> {
    aggregates
        .iter()
        .map(|(key, metrics)| AggregateRow::new(key.clone(), *metrics))
        .collect()
}
