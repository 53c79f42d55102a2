//! CLI argument definitions for sheldon.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `fetch` | Latest quote, or a truncated historical series when `--limit`/`--delta` are given |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--verbose`, `-v` | `false` | Debug-level logs on stderr |
//! | `--env-file` | `.env` if present | Dotenv file holding `BASE_URL` and `ALPHA_VANTAGE_API_KEY` |
//! | `--timeout-ms` | `10000` | Request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! sheldon fetch --ticker AAPL
//! sheldon fetch --ticker AAPL --limit 5 --delta daily
//! sheldon fetch --ticker MSFT --delta 15min
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sheldon_core::DEFAULT_TIMEOUT_MS;

/// SHELDON: Stock Handling and Evaluation Library for Data Operations and Navigation.
#[derive(Debug, Parser)]
#[command(
    name = "sheldon",
    author,
    version,
    about = "Sheldon CLI: analyze, manage, and navigate financial data.",
    long_about = "SHELDON: Stock Handling and Evaluation Library for Data Operations and Navigation.\n\
\n\
Fetches stock quotes and historical time series from an Alpha Vantage compatible API.\n\
Requires BASE_URL and ALPHA_VANTAGE_API_KEY in the environment or a .env file."
)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Dotenv file to read configuration from.
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Request timeout budget in milliseconds (at least 1).
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_TIMEOUT_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the latest stock quote or historical data for a ticker.
    ///
    /// # Examples
    ///
    ///   sheldon fetch --ticker AAPL
    ///   sheldon fetch --ticker AAPL --limit 2 --delta daily
    Fetch(FetchArgs),
}

/// Arguments for the `fetch` command.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Stock ticker to query (e.g., AAPL).
    #[arg(long)]
    pub ticker: String,

    /// Number of historical entries to return (1 with no delta fetches the latest quote).
    #[arg(long, default_value_t = 1)]
    pub limit: usize,

    /// Granularity for historical data.
    ///
    /// One of 1min, 5min, 15min, 30min, 60min, daily, weekly, monthly.
    #[arg(long)]
    pub delta: Option<String>,
}
