//! CLI argument definitions for screener.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `serve` | Run the HTTP API |
//! | `stocks` | Print every stock in the dataset |
//! | `filter` | Print stocks matching a query |
//! | `parse` | Show how a query is parsed |
//! | `fields` | List the field names queries can use |
//!
//! # Examples
//!
//! ```bash
//! screener serve --bind 127.0.0.1:8080
//! screener filter "P/E Ratio < 20 AND ROE > 0.15" --format table
//! screener parse "ROE>=0.1 AND Beta < 1" --pretty
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Screen a stock dataset with simple `field op value AND ...` queries.
#[derive(Debug, Parser)]
#[command(name = "screener", author, version, about)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// CSV dataset to load.
    #[arg(
        long,
        global = true,
        env = "SCREENER_DATASET",
        default_value = screener_web::config::DEFAULT_DATASET
    )]
    pub dataset: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns.
    Table,
    /// Single JSON document.
    Json,
    /// One JSON value per line.
    Ndjson,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API.
    ///
    ///   screener serve
    ///   screener serve --bind 127.0.0.1:9000 --allow-origin http://localhost:5173
    Serve(ServeArgs),

    /// Print every stock in the dataset.
    Stocks,

    /// Print the stocks matching a query.
    ///
    ///   screener filter "P/E Ratio < 20 AND ROE > 0.15"
    Filter(QueryArgs),

    /// Show the conditions a query parses into and the segments it drops.
    Parse(QueryArgs),

    /// List the field names a query can reference.
    Fields,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Socket address to listen on.
    #[arg(long, env = "SCREENER_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Allowed CORS origin. Repeat for several; defaults to the built-in list.
    #[arg(long = "allow-origin", env = "SCREENER_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Query text, e.g. "P/E Ratio < 20 AND ROE > 0.15".
    pub query: String,
}
