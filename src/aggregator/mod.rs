//! Aggregation of transaction records into grouped metrics.
//!
//! This module turns a filtered record set into:
//! - Per-dimension revenue/count groups (state, month, category, seller)
//! - Geo-tagged state groups for map plotting
//! - Ranked top-N lists

pub mod dimension;
pub mod geo;
pub mod group;
pub mod metrics;
pub mod rank;

// Re-export main types and functions
pub use dimension::{ByCategory, ByMonth, BySeller, ByState, Dimension, MonthKey};
pub use geo::{attach_geo, first_coordinates, GeoAttachment, GeoTaggedRow};
pub use group::{aggregate, aggregate_by, to_rows, AggregateRow, Aggregates};
pub use metrics::{calculate_totals, Metric, Metrics, SalesTotals};
pub use rank::{rank, rank_rows, Ranked};
