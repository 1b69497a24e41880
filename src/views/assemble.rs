//! Assemble the named dashboard tables from a record set.

use crate::aggregator::{
    aggregate, attach_geo, calculate_totals, rank, rank_rows, to_rows, AggregateRow, Aggregates,
    ByCategory, ByMonth, BySeller, ByState, GeoTaggedRow, Metric, Metrics, MonthKey, SalesTotals,
};
use crate::records::TransactionRecord;
use crate::utils::config::MAX_FILLED_MONTHS;
use crate::utils::GeoError;
use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// One calendar month in a monthly view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRow {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    /// Last day of the month
    pub period_end: Option<NaiveDate>,

    #[serde(flatten)]
    pub metrics: Metrics,
}

impl MonthlyRow {
    pub fn new(key: MonthKey, metrics: Metrics) -> Self {
        Self {
            year: key.year,
            month: key.month,
            month_name: key.month_name().to_string(),
            period_end: key.last_day(),
            metrics,
        }
    }

    pub fn key(&self) -> MonthKey {
        MonthKey::new(self.year, self.month)
    }
}

/// Every table the presentation layer consumes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardViews {
    pub totals: SalesTotals,

    /// State revenue with coordinates, highest revenue first
    pub revenue_by_state: Vec<GeoTaggedRow>,

    /// Chronological, gap-filled
    pub revenue_by_month: Vec<MonthlyRow>,

    /// Highest revenue first
    pub revenue_by_category: Vec<AggregateRow<String>>,

    /// State sale counts with coordinates, most sales first
    pub sales_by_state: Vec<GeoTaggedRow>,

    /// Chronological, gap-filled
    pub sales_by_month: Vec<MonthlyRow>,

    /// Most sales first
    pub sales_by_category: Vec<AggregateRow<String>>,

    /// Both metrics per seller, alphabetical
    pub sellers: Vec<AggregateRow<String>>,

    /// States left off the maps for lack of coordinates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_geo: Vec<String>,
}

impl DashboardViews {
    /// Top `n` sellers by `metric`
    pub fn top_sellers(&self, metric: Metric, n: usize) -> Vec<AggregateRow<String>> {
        rank_rows(self.sellers.clone(), metric, n)
    }

    /// Top `n` geo-tagged states by `metric`
    pub fn top_states(&self, metric: Metric, n: usize) -> Vec<GeoTaggedRow> {
        let rows = match metric {
            Metric::SumPrice => &self.revenue_by_state,
            Metric::Count => &self.sales_by_state,
        };
        rows.iter().take(n).cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.sales == 0
    }
}

/// Build all views from one record set
pub fn assemble_views(records: &[TransactionRecord]) -> DashboardViews {
    debug!("Assembling views from {} records", records.len());

    let by_state = aggregate(records, &ByState);
    let by_month = aggregate(records, &ByMonth);
    let by_category = aggregate(records, &ByCategory);
    let by_seller = aggregate(records, &BySeller);

    let geo = attach_geo(&to_rows(&by_state), records);
    let state_count = geo.rows.len();
    let monthly = fill_month_gaps(&by_month);

    DashboardViews {
        totals: calculate_totals(records),
        revenue_by_state: rank_rows(geo.rows.clone(), Metric::SumPrice, state_count),
        revenue_by_month: monthly.clone(),
        revenue_by_category: rank(&by_category, Metric::SumPrice, by_category.len()),
        sales_by_state: rank_rows(geo.rows, Metric::Count, state_count),
        sales_by_month: monthly,
        sales_by_category: rank(&by_category, Metric::Count, by_category.len()),
        sellers: to_rows(&by_seller),
        missing_geo: geo
            .missing
            .into_iter()
            .map(|GeoError::MissingGeoData(state)| state)
            .collect(),
    }
}

/// Monthly rows from the first to the last observed month, zero-filled.
///
/// Spans wider than `MAX_FILLED_MONTHS` are not filled; only observed
/// months are returned.
pub fn fill_month_gaps(by_month: &Aggregates<MonthKey>) -> Vec<MonthlyRow> {
    let (Some(first), Some(last)) = (by_month.keys().next(), by_month.keys().next_back()) else {
        return Vec::new();
    };

    let span = first.months_until(last);
    if span > MAX_FILLED_MONTHS {
        warn!(
            "Monthly view spans {} to {} ({} months), skipping gap filling",
            first, last, span
        );
        return by_month
            .iter()
            .map(|(key, metrics)| MonthlyRow::new(*key, *metrics))
            .collect();
    }

    let mut rows = Vec::new();
    let mut current = *first;
    while current <= *last {
        let metrics = by_month.get(&current).copied().unwrap_or_default();
        rows.push(MonthlyRow::new(current, metrics));
        current = current.succ();
    }
    rows
}
