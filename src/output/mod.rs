//! Output writers for dashboard reports.
//!
//! This module handles:
//! - JSON reports (pretty)
//! - Text summaries

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use summary::{format_compact, format_money, render_summary};
