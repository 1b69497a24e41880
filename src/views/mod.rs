//! Dashboard view assembly.
//!
//! Sequences filtering, aggregation, geo tagging and ranking into the
//! fixed set of named tables the presentation layer reads.

pub mod assemble;
pub mod context;
pub mod report;

pub use assemble::{assemble_views, fill_month_gaps, DashboardViews, MonthlyRow};
pub use context::SalesContext;
pub use report::{to_report, DashboardReport};
