//! Per-group metrics and whole-set summary statistics.

use crate::records::{Price, TransactionRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accumulated revenue and sale count of one group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Exact sum of the contributing prices
    pub sum_price: Price,

    /// Number of contributing records
    pub count: u64,
}

impl Metrics {
    pub fn new(sum_price: Price, count: u64) -> Self {
        Self { sum_price, count }
    }

    /// Add one sale
    pub fn record(&mut self, price: Price) {
        self.sum_price += price;
        self.count += 1;
    }

    /// Value of the chosen metric, comparable across rows
    pub fn value(&self, metric: Metric) -> u64 {
        match metric {
            Metric::SumPrice => self.sum_price.cents(),
            Metric::Count => self.count,
        }
    }

    /// Mean price per sale, `None` for an empty group
    pub fn average_price(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum_price.as_f64() / self.count as f64)
    }
}

/// Metric used for ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Revenue
    SumPrice,
    /// Number of sales
    Count,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::SumPrice => "revenue",
            Metric::Count => "sales",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Headline figures for a record set
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesTotals {
    pub revenue: Price,
    pub sales: u64,
    /// Mean price per sale; zero when there are no sales
    pub average_ticket: f64,
}

impl SalesTotals {
    pub fn summary(&self) -> String {
        format!(
            "Revenue: {} | Sales: {} | Average ticket: {:.2}",
            self.revenue, self.sales, self.average_ticket
        )
    }
}

/// Totals over all records
pub fn calculate_totals<'a>(records: impl IntoIterator<Item = &'a TransactionRecord>) -> SalesTotals {
    let mut metrics = Metrics::default();
    for record in records {
        metrics.record(record.price);
    }

    SalesTotals {
        revenue: metrics.sum_price,
        sales: metrics.count,
        average_ticket: metrics.average_price().unwrap_or(0.0),
    }
}
