//! Retrieval of raw sales payloads over HTTP or from disk.

pub mod client;
pub mod file;

pub use client::{RawPayload, SalesClient};
pub use file::load_payload_file;
