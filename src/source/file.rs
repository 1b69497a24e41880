//! Read a raw payload from disk.

use super::client::RawPayload;
use crate::utils::error::SourceError;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a payload saved from the endpoint (or produced by hand)
pub fn load_payload_file(path: impl AsRef<Path>) -> Result<RawPayload, SourceError> {
    let path = path.as_ref();
    debug!("Reading payload from: {}", path.display());

    let file = File::open(path)?;
    let payload = serde_json::from_reader(BufReader::new(file))?;
    Ok(payload)
}
