//! CLI Adapter
//!
//! Command-line interface for the crawler.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{CliApp, Command, RunCmd, ScanCmd, DEFAULT_CONFIG_PATH};
