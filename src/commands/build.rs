//! Build command implementation.
//!
//! The build command:
//! 1. Loads the region table
//! 2. Fetches the raw payload (HTTP or file)
//! 3. Ingests records, rejecting malformed rows
//! 4. Filters into a request-scoped context
//! 5. Assembles views and rankings
//! 6. Writes the JSON report

use super::models::BuildArgs;
use crate::output::{render_summary, write_report};
use crate::records::{ingest, FilterCriteria, RecordStore, RegionTable};
use crate::source::{load_payload_file, RawPayload, SalesClient};
use crate::utils::config::{MAX_TOP_SELLERS, MAX_YEAR, MIN_TOP_SELLERS, MIN_YEAR};
use crate::views::{to_report, DashboardReport, SalesContext};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the build command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Region table read/parse failures
/// * Source retrieval failures
/// * Payload that is neither a record list nor a column table
/// * File write errors
pub fn execute_build(args: BuildArgs) -> Result<DashboardReport> {
    let start_time = Instant::now();

    // Step 1: Region table
    info!("Step 1/6: Loading region table...");
    let regions = match &args.regions_file {
        Some(path) => RegionTable::load(path)
            .with_context(|| format!("Failed to load region table {}", path.display()))?,
        None => RegionTable::brazil(),
    };

    let criteria = FilterCriteria::new()
        .with_region(args.region.clone().unwrap_or_default())
        .with_year(args.year)
        .with_sellers(args.sellers.iter().cloned());

    // Step 2: Raw payload
    info!("Step 2/6: Fetching raw records...");
    let payload = fetch_payload(&args, &criteria)?;

    // Step 3: Ingest
    info!("Step 3/6: Ingesting records...");
    let ingested = ingest(&payload).context("Failed to parse sales payload")?;
    let stats = ingested.stats();
    let store = RecordStore::new(ingested.records);

    // Step 4: Filter
    info!("Step 4/6: Applying selection {:?}...", criteria);
    let context = SalesContext::new(&store, criteria, &regions);

    // Step 5: Views
    info!("Step 5/6: Assembling views...");
    let report = to_report(&context, stats, args.top_sellers, args.top_states);
    info!("Totals: {}", report.views.totals.summary());

    debug!("Top sellers by revenue:");
    for (i, row) in report.top_sellers_by_revenue.iter().enumerate() {
        debug!("  {}. {} ({})", i + 1, row.key, row.metrics.sum_price);
    }

    // Step 6: Output
    info!("Step 6/6: Writing report...");
    write_report(&report, &args.output_json).context("Failed to write report JSON")?;
    info!("✓ Report written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("SALES DASHBOARD");
        println!("{}", "=".repeat(80));
        println!("{}", render_summary(&report));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Build completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Fetch the payload from whichever source was given
///
/// **Private** - internal helper for execute_build
fn fetch_payload(args: &BuildArgs, criteria: &FilterCriteria) -> Result<RawPayload> {
    if let Some(path) = &args.input {
        return load_payload_file(path)
            .with_context(|| format!("Failed to read payload file {}", path.display()));
    }

    let url = args
        .source_url
        .as_deref()
        .context("No source URL or input file given")?;
    let client = SalesClient::new(url).context("Failed to create HTTP client")?;

    client
        .fetch(remote_region(args, criteria), criteria.year)
        .with_context(|| format!("Failed to fetch records from {}", url))
}

/// Region forwarded to the endpoint.
///
/// Custom region tables define names the endpoint does not know, so the
/// region is then applied locally only.
fn remote_region<'a>(args: &BuildArgs, criteria: &'a FilterCriteria) -> Option<&'a str> {
    if args.regions_file.is_some() {
        debug!("Custom region table in use, fetching all regions");
        return None;
    }
    criteria.region.as_deref()
}

/// Validate build arguments
///
/// **Public** - can be called before execute_build for early validation
pub fn validate_args(args: &BuildArgs) -> Result<()> {
    match (&args.source_url, &args.input) {
        (Some(_), Some(_)) => anyhow::bail!("Give either a source URL or an input file, not both"),
        (None, None) => anyhow::bail!("A source URL or an input file is required"),
        (Some(url), None) => {
            if url.is_empty() {
                anyhow::bail!("Source URL cannot be empty");
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("Source URL must start with http:// or https://");
            }
        }
        (None, Some(_)) => {}
    }

    if !(MIN_TOP_SELLERS..=MAX_TOP_SELLERS).contains(&args.top_sellers) {
        anyhow::bail!(
            "top_sellers must be between {} and {}",
            MIN_TOP_SELLERS,
            MAX_TOP_SELLERS
        );
    }

    if let Some(year) = args.year {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            anyhow::bail!("year must be between {} and {}", MIN_YEAR, MAX_YEAR);
        }
    }

    Ok(())
}
