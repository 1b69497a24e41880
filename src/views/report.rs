//! Report schema written to JSON.
//!
//! Schema is versioned to allow future evolution.

use super::assemble::DashboardViews;
use super::context::SalesContext;
use crate::aggregator::{AggregateRow, GeoTaggedRow, Metric};
use crate::records::{FilterCriteria, IngestStats};
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// RFC 3339 timestamp when the report was generated
    pub generated_at: String,

    /// Selection the views were computed for
    pub criteria: FilterCriteria,

    /// Ingestion row counts
    pub ingest: IngestStats,

    pub views: DashboardViews,

    pub top_sellers_by_revenue: Vec<AggregateRow<String>>,
    pub top_sellers_by_count: Vec<AggregateRow<String>>,
    pub top_states_by_revenue: Vec<GeoTaggedRow>,
    pub top_states_by_count: Vec<GeoTaggedRow>,
}

/// Build a report for one context
pub fn to_report(
    context: &SalesContext,
    ingest: IngestStats,
    top_sellers: usize,
    top_states: usize,
) -> DashboardReport {
    let views = context.views();

    DashboardReport {
        version: SCHEMA_VERSION.to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        criteria: context.criteria().clone(),
        ingest,
        top_sellers_by_revenue: views.top_sellers(Metric::SumPrice, top_sellers),
        top_sellers_by_count: views.top_sellers(Metric::Count, top_sellers),
        top_states_by_revenue: views.top_states(Metric::SumPrice, top_states),
        top_states_by_count: views.top_states(Metric::Count, top_states),
        views,
    }
}
