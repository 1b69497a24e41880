//! HTTP client for the sales records endpoint.

use crate::utils::config::DEFAULT_SOURCE_TIMEOUT;
use crate::utils::error::SourceError;
use log::{debug, info};
use reqwest::blocking::Client;

/// Raw payload as served (parsed later by `records::ingest`)
pub type RawPayload = serde_json::Value;

/// Client fetching raw sales records
pub struct SalesClient {
    client: Client,
    url: String,
}

impl SalesClient {
    /// Create a new client
    pub fn new(url: impl Into<String>) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(DEFAULT_SOURCE_TIMEOUT)
            .build()
            .map_err(SourceError::RequestFailed)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch records, letting the server pre-filter by region and year
    pub fn fetch(&self, region: Option<&str>, year: Option<i32>) -> Result<RawPayload, SourceError> {
        let params = query_params(region, year);
        info!("Fetching sales records from: {}", self.url);
        debug!("Query parameters: {:?}", params);

        let response = self
            .client
            .get(&self.url)
            .query(&params)
            .send()
            .map_err(SourceError::RequestFailed)?;

        if !response.status().is_success() {
            return Err(SourceError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        response.json().map_err(SourceError::RequestFailed)
    }
}

/// Query string the endpoint understands; empty values mean "all"
fn query_params(region: Option<&str>, year: Option<i32>) -> [(&'static str, String); 2] {
    [
        ("região", region.map(str::to_lowercase).unwrap_or_default()),
        ("ano", year.map(|y| y.to_string()).unwrap_or_default()),
    ]
}
