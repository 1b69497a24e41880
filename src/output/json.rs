//! Dashboard report persistence.
//!
//! Reports are written as pretty-printed JSON so they can be diffed and
//! fed to a chart front end as-is.

use crate::utils::error::OutputError;
use crate::views::DashboardReport;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write a report, creating missing parent directories
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, a directory, or an uncreatable parent
/// * `OutputError::WriteFailed` - the file cannot be created
/// * `OutputError::SerializationFailed` - JSON encoding failed
pub fn write_report(report: &DashboardReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
        })?;
    }

    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;

    info!(
        "Report with {} states and {} sellers written to {} ({} bytes)",
        report.views.revenue_by_state.len(),
        report.views.sellers.len(),
        output_path.display(),
        file_size(output_path)
    );

    Ok(())
}

/// Serialize a report to a pretty JSON string
pub fn report_to_string(report: &DashboardReport) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Reject empty paths and existing directories
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn file_size(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Load a previously written report
///
/// # Errors
/// * `OutputError::ReadFailed` - file cannot be opened
/// * `OutputError::SerializationFailed` - not a report document
pub fn read_report(input_path: impl AsRef<Path>) -> Result<DashboardReport, OutputError> {
    let input_path = input_path.as_ref();
    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let report: DashboardReport = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Report {} generated at {} ({} sales)",
        report.version, report.generated_at, report.views.totals.sales
    );

    Ok(report)
}
