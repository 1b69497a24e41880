//! Order aggregates by a metric and keep the top N.
//!
//! Sorting is descending by the chosen metric; equal values fall back to
//! ascending key order (alphabetical for names, chronological for months),
//! so the output never depends on input order.

use super::geo::GeoTaggedRow;
use super::group::{to_rows, AggregateRow, Aggregates};
use super::metrics::{Metric, Metrics};
use std::cmp::Reverse;

/// Something that can be ranked
pub trait Ranked {
    type Key: Ord;

    fn rank_key(&self) -> &Self::Key;
    fn metrics(&self) -> &Metrics;
}

impl<K: Ord> Ranked for AggregateRow<K> {
    type Key = K;

    fn rank_key(&self) -> &K {
        &self.key
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

impl Ranked for GeoTaggedRow {
    type Key = String;

    fn rank_key(&self) -> &String {
        &self.state
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

/// Rank an aggregate mapping
///
/// `top_n` larger than the number of groups returns every group.
pub fn rank<K: Ord + Clone>(
    aggregates: &Aggregates<K>,
    metric: Metric,
    top_n: usize,
) -> Vec<AggregateRow<K>> {
    rank_rows(to_rows(aggregates), metric, top_n)
}

/// Rank already materialised rows
pub fn rank_rows<T: Ranked>(mut rows: Vec<T>, metric: Metric, top_n: usize) -> Vec<T> {
    rows.sort_by(|a, b| {
        Reverse(a.metrics().value(metric))
            .cmp(&Reverse(b.metrics().value(metric)))
            .then_with(|| a.rank_key().cmp(b.rank_key()))
    });
    rows.truncate(top_n);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::dimension::MonthKey;
    use crate::records::Price;

    fn aggregates(entries: &[(&str, u64, u64)]) -> Aggregates<String> {
        entries
            .iter()
            .map(|(key, cents, count)| {
                (key.to_string(), Metrics::new(Price::from_cents(*cents), *count))
            })
            .collect()
    }

    fn keys<K: Clone>(rows: &[AggregateRow<K>]) -> Vec<K> {
        rows.iter().map(|r| r.key.clone()).collect()
    }

    #[test]
    fn test_rank_by_revenue() {
        let groups = aggregates(&[("A", 100, 5), ("B", 300, 1), ("C", 200, 2)]);
        let ranked = rank(&groups, Metric::SumPrice, 2);
        assert_eq!(keys(&ranked), vec!["B", "C"]);
    }

    #[test]
    fn test_rank_by_count() {
        let groups = aggregates(&[("A", 100, 5), ("B", 300, 1), ("C", 200, 2)]);
        let ranked = rank(&groups, Metric::Count, 3);
        assert_eq!(keys(&ranked), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_ties_break_by_ascending_key() {
        let groups = aggregates(&[("Zed", 100, 1), ("Amy", 100, 1), ("Max", 100, 1)]);
        let ranked = rank(&groups, Metric::SumPrice, 3);
        assert_eq!(keys(&ranked), vec!["Amy", "Max", "Zed"]);
    }

    #[test]
    fn test_month_ties_break_chronologically() {
        let rows = vec![
            AggregateRow::new(MonthKey::new(2023, 5), Metrics::new(Price::from_cents(1), 1)),
            AggregateRow::new(MonthKey::new(2022, 7), Metrics::new(Price::from_cents(1), 1)),
        ];
        let ranked = rank_rows(rows, Metric::Count, 2);
        assert_eq!(ranked[0].key, MonthKey::new(2022, 7));
    }

    #[test]
    fn test_top_n_clamped() {
        let groups = aggregates(&[("A", 1, 1), ("B", 2, 1)]);
        assert_eq!(rank(&groups, Metric::SumPrice, 10).len(), 2);
        assert!(rank(&groups, Metric::SumPrice, 0).is_empty());
        assert!(rank(&Aggregates::<String>::new(), Metric::Count, 5).is_empty());
    }
}
