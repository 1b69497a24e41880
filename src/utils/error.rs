//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while retrieving the raw sales payload
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid source response: {0}")]
    InvalidResponse(String),

    #[error("Failed to read payload file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Payload is not valid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that reject the payload as a whole
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid payload format: {0}")]
    InvalidFormat(String),
}

/// Errors that reject a single record during ingestion.
///
/// The rest of the batch is still processed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("row {row}: cannot parse purchase date '{value}'")]
    InvalidDateFormat { row: usize, value: String },

    #[error("row {row}: invalid price '{value}'")]
    InvalidPrice { row: usize, value: String },

    #[error("row {row}: missing field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: state is empty")]
    EmptyState { row: usize },

    #[error("row {row}: malformed record: {reason}")]
    Malformed { row: usize, reason: String },
}

impl RecordError {
    /// Row index (position in the payload) of the rejected record
    pub fn row(&self) -> usize {
        match self {
            RecordError::InvalidDateFormat { row, .. }
            | RecordError::InvalidPrice { row, .. }
            | RecordError::MissingField { row, .. }
            | RecordError::EmptyState { row }
            | RecordError::Malformed { row, .. } => *row,
        }
    }
}

/// Errors raised while joining coordinates onto state aggregates
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("no record carries coordinates for state '{0}'")]
    MissingGeoData(String),
}

/// Errors that can occur while loading a region table
#[derive(Error, Debug)]
pub enum RegionError {
    #[error("Failed to read region table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse region table: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Region table is empty")]
    Empty,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
