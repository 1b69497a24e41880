use crate::output::{format_money, read_report};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Revenue: {}", format_money(report.views.totals.revenue.as_f64()));
    println!("  Sales: {}", report.views.totals.sales);
    println!("  States: {}", report.views.revenue_by_state.len());
    println!("  Sellers: {}", report.views.sellers.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Sales Dash Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string              - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string         - RFC 3339 timestamp");
        println!("  criteria: object             - region, year, sellers applied");
        println!("  ingest: object               - total_rows, accepted, rejected");
        println!("  views: object");
        println!("    totals: object             - revenue, sales, average_ticket");
        println!("    revenue_by_state: array    - state, latitude, longitude, sum_price, count");
        println!("    revenue_by_month: array    - year, month, month_name, period_end, sum_price, count");
        println!("    revenue_by_category: array - key, sum_price, count");
        println!("    sales_by_state: array      - as revenue_by_state, ordered by count");
        println!("    sales_by_month: array      - as revenue_by_month");
        println!("    sales_by_category: array   - as revenue_by_category, ordered by count");
        println!("    sellers: array             - key, sum_price, count");
        println!("  top_sellers_by_revenue: array");
        println!("  top_sellers_by_count: array");
        println!("  top_states_by_revenue: array");
        println!("  top_states_by_count: array");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Sales Dash v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Revenue and sales-count aggregation for e-commerce sales dashboards.");
}
