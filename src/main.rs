//! Sales Dash CLI
//!
//! Builds dashboard reports (revenue and sales by state, month, category
//! and seller) from raw sales records.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use sales_dash::commands::{
    display_schema, display_version, execute_build, validate_args, validate_report_file, BuildArgs,
};
use sales_dash::utils::config::{DEFAULT_SOURCE_URL, DEFAULT_TOP_SELLERS, DEFAULT_TOP_STATES};

/// Sales Dash - sales dashboard aggregation
#[derive(Parser, Debug)]
#[command(name = "sales-dash")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a dashboard report
    Build {
        /// Endpoint serving the raw records
        #[arg(short, long, env = "SALES_DASH_SOURCE", conflicts_with = "input")]
        source: Option<String>,

        /// Read the raw records from a JSON file instead
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Region to keep ("Brasil" for all)
        #[arg(short, long)]
        region: Option<String>,

        /// Year to keep (all years if omitted)
        #[arg(short, long)]
        year: Option<i32>,

        /// Seller to keep (repeatable; all sellers if omitted)
        #[arg(long = "seller")]
        sellers: Vec<String>,

        /// Number of sellers in the rankings
        #[arg(long, default_value_t = DEFAULT_TOP_SELLERS)]
        top_sellers: usize,

        /// Number of states in the rankings
        #[arg(long, default_value_t = DEFAULT_TOP_STATES)]
        top_states: usize,

        /// TOML region table replacing the built-in Brazilian regions
        #[arg(long)]
        regions: Option<PathBuf>,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "dashboard.json")]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Build {
            source,
            input,
            region,
            year,
            sellers,
            top_sellers,
            top_states,
            regions,
            output,
            summary,
        } => {
            // Fall back to the public endpoint when no file is given
            let source_url = match (&source, &input) {
                (None, None) => Some(DEFAULT_SOURCE_URL.to_string()),
                _ => source,
            };

            let args = BuildArgs {
                source_url,
                input,
                region,
                year,
                sellers,
                top_sellers,
                top_states,
                regions_file: regions,
                output_json: output,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_build(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
