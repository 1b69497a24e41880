//! Plain-text dashboard summary for terminal output.

use crate::aggregator::{AggregateRow, GeoTaggedRow};
use crate::views::DashboardReport;

const CURRENCY: &str = "R$";

/// Compact number with a thousands/millions suffix
///
/// `1500.0` becomes `"1.50 mil"`, `2_300_000.0` becomes `"2.30 milhões"`.
pub fn format_compact(value: f64, prefix: &str) -> String {
    let mut value = value;
    for unit in ["", "mil"] {
        if value < 1000.0 {
            return join_parts(prefix, &format!("{:.2}", value), unit);
        }
        value /= 1000.0;
    }
    join_parts(prefix, &format!("{:.2}", value), "milhões")
}

/// Compact currency amount
pub fn format_money(value: f64) -> String {
    format_compact(value, CURRENCY)
}

fn join_parts(prefix: &str, number: &str, unit: &str) -> String {
    [prefix, number, unit]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a report as text
pub fn render_summary(report: &DashboardReport) -> String {
    let views = &report.views;
    let mut lines = Vec::new();

    lines.push(format!("Revenue:  {}", format_money(views.totals.revenue.as_f64())));
    lines.push(format!("Sales:    {}", format_compact(views.totals.sales as f64, "")));
    lines.push(format!(
        "Records:  {} accepted, {} rejected",
        report.ingest.accepted, report.ingest.rejected
    ));

    lines.push(String::new());
    lines.push("Top states by revenue".to_string());
    push_states(&mut lines, &report.top_states_by_revenue);

    lines.push(String::new());
    lines.push("Revenue by category".to_string());
    push_rows(&mut lines, &views.revenue_by_category);

    lines.push(String::new());
    lines.push("Monthly revenue".to_string());
    for row in &views.revenue_by_month {
        lines.push(format!(
            "  {:<4} {:<10} {:>16} {:>8}",
            row.year,
            row.month_name,
            format_money(row.metrics.sum_price.as_f64()),
            row.metrics.count
        ));
    }

    lines.push(String::new());
    lines.push(format!("Top {} sellers by revenue", report.top_sellers_by_revenue.len()));
    push_rows(&mut lines, &report.top_sellers_by_revenue);

    lines.push(String::new());
    lines.push(format!("Top {} sellers by sales", report.top_sellers_by_count.len()));
    push_rows(&mut lines, &report.top_sellers_by_count);

    lines.join("\n")
}

fn push_rows(lines: &mut Vec<String>, rows: &[AggregateRow<String>]) {
    if rows.is_empty() {
        lines.push("  (no data)".to_string());
    }
    for row in rows {
        lines.push(format!(
            "  {:<28} {:>16} {:>8}",
            truncate(&row.key, 28),
            format_money(row.metrics.sum_price.as_f64()),
            row.metrics.count
        ));
    }
}

fn push_states(lines: &mut Vec<String>, rows: &[GeoTaggedRow]) {
    if rows.is_empty() {
        lines.push("  (no data)".to_string());
    }
    for row in rows {
        lines.push(format!(
            "  {:<4} {:>16} {:>8}  ({:.2}, {:.2})",
            row.state,
            format_money(row.metrics.sum_price.as_f64()),
            row.metrics.count,
            row.coordinates.latitude,
            row.coordinates.longitude
        ));
    }
}

// Truncate on a char boundary
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
