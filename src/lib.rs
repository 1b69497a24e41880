//! Sales Dash
//!
//! Revenue and sales-count aggregation for e-commerce sales dashboards.
//!
//! Raw sales records are ingested, filtered by region, year and seller,
//! then grouped by state, month, category and seller. State groups carry
//! map coordinates; every grouping can be ranked into top-N lists.
//!
//! ## Getting Started
//!
//! ```ignore
//! use sales_dash::records::{ingest, FilterCriteria, RecordStore, RegionTable};
//! use sales_dash::views::SalesContext;
//!
//! let report = ingest(&payload)?;
//! let store = RecordStore::new(report.records);
//! let criteria = FilterCriteria::new().with_region("Sudeste").with_year(Some(2022));
//! let views = SalesContext::new(&store, criteria, &RegionTable::brazil()).views();
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod records;
pub mod source;
pub mod utils;
pub mod views;
