use crate::utils::config::{DEFAULT_TOP_SELLERS, DEFAULT_TOP_STATES};
use std::path::PathBuf;

/// Arguments for the build command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct BuildArgs {
    /// Endpoint serving the raw records (exclusive with `input`)
    pub source_url: Option<String>,

    /// Local payload file (exclusive with `source_url`)
    pub input: Option<PathBuf>,

    /// Region selection; `None` or "Brasil" for all states
    pub region: Option<String>,

    /// Year selection; `None` for the whole period
    pub year: Option<i32>,

    /// Sellers to keep; empty for all
    pub sellers: Vec<String>,

    /// Length of the seller rankings
    pub top_sellers: usize,

    /// Length of the state rankings
    pub top_states: usize,

    /// TOML region table replacing the built-in one
    pub regions_file: Option<PathBuf>,

    /// Output path for the JSON report
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            source_url: None,
            input: None,
            region: None,
            year: None,
            sellers: Vec::new(),
            top_sellers: DEFAULT_TOP_SELLERS,
            top_states: DEFAULT_TOP_STATES,
            regions_file: None,
            output_json: PathBuf::from("dashboard.json"),
            print_summary: false,
        }
    }
}
