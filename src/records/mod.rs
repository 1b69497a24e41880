//! Transaction records: schema, ingestion, region table and filtering.

pub mod filter;
pub mod ingest;
pub mod regions;
pub mod schema;
pub mod store;

// Re-export main types
pub use filter::{filter_records, FilterCriteria};
pub use ingest::{ingest, ingest_str, IngestReport, IngestStats};
pub use regions::RegionTable;
pub use schema::{Coordinates, Price, TransactionRecord};
pub use store::RecordStore;
