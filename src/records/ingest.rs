//! Ingestion of raw sales payloads into transaction records.
//!
//! The source serves either a list of record objects or a column-oriented
//! table (`{column: [values]}` / `{column: {row: value}}`). Structurally
//! malformed rows are rejected one by one; the rest of the batch survives.

use super::schema::{Price, TransactionRecord};
use crate::utils::config::{
    CATEGORY_FIELDS, DATE_FIELDS, DATE_FORMATS, FREIGHT_FIELDS, INSTALLMENTS_FIELDS,
    LATITUDE_FIELDS, LONGITUDE_FIELDS, PAYMENT_TYPE_FIELDS, PRICE_FIELDS, PRODUCT_FIELDS,
    RATING_FIELDS, SELLER_FIELDS, STATE_FIELDS,
};
use crate::utils::error::{ParseError, RecordError};
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Detected payload layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PayloadFormat {
    /// `[{...}, {...}]`
    Records,
    /// `{"column": [...]}` or `{"column": {"0": ..., "1": ...}}`
    Columns,
}

/// Outcome of ingesting one payload
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// Records that passed validation, in payload order
    pub records: Vec<TransactionRecord>,

    /// One entry per rejected row
    pub rejected: Vec<RecordError>,
}

impl IngestReport {
    pub fn total_rows(&self) -> usize {
        self.records.len() + self.rejected.len()
    }

    pub fn stats(&self) -> IngestStats {
        IngestStats {
            total_rows: self.total_rows(),
            accepted: self.records.len(),
            rejected: self.rejected.len(),
        }
    }
}

/// Row counts kept in the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    pub total_rows: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// Parse a raw payload into transaction records
///
/// # Errors
/// * `ParseError::InvalidFormat` - payload is neither a record list nor a column table
pub fn ingest(payload: &Value) -> Result<IngestReport, ParseError> {
    let (rows, format) = extract_rows(payload)?;
    debug!("Ingesting {} rows ({:?} layout)", rows.len(), format);

    let mut report = IngestReport::default();
    for (row, value) in rows.iter().enumerate() {
        match parse_record(row, value) {
            Ok(record) => report.records.push(record),
            Err(e) => {
                warn!("Rejected record: {}", e);
                report.rejected.push(e);
            }
        }
    }

    info!(
        "Ingested {} records ({} rejected)",
        report.records.len(),
        report.rejected.len()
    );

    Ok(report)
}

/// Parse a JSON string payload
pub fn ingest_str(payload: &str) -> Result<IngestReport, ParseError> {
    let value: Value = serde_json::from_str(payload)?;
    ingest(&value)
}

/// Split the payload into one JSON value per row
fn extract_rows(payload: &Value) -> Result<(Vec<Value>, PayloadFormat), ParseError> {
    match payload {
        Value::Array(items) => Ok((items.clone(), PayloadFormat::Records)),
        Value::Object(columns) if columns.values().all(|c| c.is_array() || c.is_object()) => {
            Ok((pivot_columns(columns)?, PayloadFormat::Columns))
        }
        _ => Err(ParseError::InvalidFormat(
            "payload must be an array of records or an object of columns".to_string(),
        )),
    }
}

/// Turn a column-oriented table into row objects
fn pivot_columns(columns: &Map<String, Value>) -> Result<Vec<Value>, ParseError> {
    // Row labels of index-keyed columns are sorted numerically
    let mut labels: BTreeSet<usize> = BTreeSet::new();
    for (name, column) in columns {
        match column {
            Value::Array(values) => labels.extend(0..values.len()),
            Value::Object(cells) => {
                for key in cells.keys() {
                    let index = key.parse::<usize>().map_err(|_| {
                        ParseError::InvalidFormat(format!(
                            "column '{}' has non-numeric row label '{}'",
                            name, key
                        ))
                    })?;
                    labels.insert(index);
                }
            }
            _ => {}
        }
    }

    let rows = labels
        .into_iter()
        .map(|index| {
            let mut row = Map::new();
            for (name, column) in columns {
                let cell = match column {
                    Value::Array(values) => values.get(index),
                    Value::Object(cells) => cells.get(&index.to_string()),
                    _ => None,
                };
                if let Some(cell) = cell {
                    row.insert(name.clone(), cell.clone());
                }
            }
            Value::Object(row)
        })
        .collect();

    Ok(rows)
}

/// Validate and convert a single row
fn parse_record(row: usize, value: &Value) -> Result<TransactionRecord, RecordError> {
    let obj = value.as_object().ok_or_else(|| RecordError::Malformed {
        row,
        reason: "row is not an object".to_string(),
    })?;

    let price = parse_price(row, require(obj, row, PRICE_FIELDS, "price")?)?;
    let purchase_date = parse_date(row, require(obj, row, DATE_FIELDS, "purchase_date")?)?;

    let state = require_text(obj, row, STATE_FIELDS, "state")?;
    if state.is_empty() {
        return Err(RecordError::EmptyState { row });
    }
    let category = require_text(obj, row, CATEGORY_FIELDS, "category")?;
    let seller = require_text(obj, row, SELLER_FIELDS, "seller")?;

    let latitude = parse_coordinate(row, require(obj, row, LATITUDE_FIELDS, "latitude")?)?;
    let longitude = parse_coordinate(row, require(obj, row, LONGITUDE_FIELDS, "longitude")?)?;

    Ok(TransactionRecord {
        price,
        purchase_date,
        state,
        category,
        seller,
        latitude,
        longitude,
        product: field(obj, PRODUCT_FIELDS).and_then(text),
        freight: field(obj, FREIGHT_FIELDS).and_then(number),
        rating: field(obj, RATING_FIELDS)
            .and_then(number)
            .filter(|r| (0.0..=u8::MAX as f64).contains(r))
            .map(|r| r as u8),
        payment_type: field(obj, PAYMENT_TYPE_FIELDS).and_then(text),
        installments: field(obj, INSTALLMENTS_FIELDS)
            .and_then(number)
            .filter(|n| *n >= 0.0)
            .map(|n| n as u32),
    })
}

/// First non-null value among the accepted field names
fn field<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .find_map(|name| obj.get(*name).filter(|v| !v.is_null()))
}

fn require<'a>(
    obj: &'a Map<String, Value>,
    row: usize,
    names: &[&str],
    label: &'static str,
) -> Result<&'a Value, RecordError> {
    field(obj, names).ok_or(RecordError::MissingField { row, field: label })
}

fn require_text(
    obj: &Map<String, Value>,
    row: usize,
    names: &[&str],
    label: &'static str,
) -> Result<String, RecordError> {
    let value = require(obj, row, names, label)?;
    text(value).ok_or_else(|| RecordError::Malformed {
        row,
        reason: format!("{} must be text, got {}", label, value),
    })
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn parse_price(row: usize, value: &Value) -> Result<Price, RecordError> {
    number(value)
        .and_then(Price::from_decimal)
        .ok_or_else(|| RecordError::InvalidPrice {
            row,
            value: display_value(value),
        })
}

fn parse_date(row: usize, value: &Value) -> Result<NaiveDate, RecordError> {
    let raw = value.as_str().map(str::trim).unwrap_or_default();

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .ok_or_else(|| RecordError::InvalidDateFormat {
            row,
            value: display_value(value),
        })
}

fn parse_coordinate(row: usize, value: &Value) -> Result<f64, RecordError> {
    number(value)
        .filter(|c| c.is_finite())
        .ok_or_else(|| RecordError::Malformed {
            row,
            reason: format!("coordinate is not a number: {}", value),
        })
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
