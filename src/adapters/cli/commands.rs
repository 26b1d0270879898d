//! CLI Command Definitions
//!
//! Argument surface for the crawler, parsed with clap derive macros.
//! Command handlers live in the binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default config file consulted when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// wsb-lurker - Reddit Stock Mention Crawler
#[derive(Parser, Debug)]
#[command(
    name = "wsb-lurker",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Counts the most-mentioned stock tickers across stock subreddits",
    long_about = "wsb-lurker crawls a configured list of subreddits, extracts \
                  ticker-shaped tokens from post titles, bodies and top comments, \
                  and reports the most-mentioned symbols."
)]
pub struct CliApp {
    /// The command to execute; a bare invocation runs one crawl cycle
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one crawl-and-report cycle
    Run(RunCmd),

    /// Rank symbols from a local text file or stdin (no network)
    Scan(ScanCmd),
}

impl Default for Command {
    fn default() -> Self {
        Command::Run(RunCmd {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            top: None,
            output: None,
        })
    }
}

/// Run one crawl cycle
#[derive(Parser, Debug)]
pub struct RunCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Override the number of ranking entries
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Override the result file path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Rank symbols from local text
#[derive(Parser, Debug)]
pub struct ScanCmd {
    /// Input text file; reads stdin when omitted
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Number of ranking entries
    #[arg(long, value_name = "N", default_value = "10")]
    pub top: usize,

    /// Optional configuration file for the symbol filter
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
