//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits and the thin
//! output glue:
//! - Reddit: OAuth2 listing API client
//! - Report: ranked-list rendering, stdout echo and result file
//! - CLI: command-line argument surface

pub mod cli;
pub mod reddit;
pub mod report;

pub use cli::CliApp;
pub use reddit::{RedditClient, RedditConfig, RedditCredentials};
