//! Configuration Loader
//!
//! Crawl knobs live in a TOML file; Reddit secrets come from the
//! environment only (a `.env` file is honored via dotenvy at startup) and
//! are never read from TOML.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::application::crawler::CrawlPlan;
use crate::domain::{Denylist, SymbolFilter, MAX_SYMBOL_LEN};

/// User-agent sent when REDDIT_USER_AGENT is not set.
pub const DEFAULT_USER_AGENT: &str = "wsb-lurker/0.1";

/// Main configuration structure matching config/default.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub crawl: CrawlSection,
    #[serde(default)]
    pub filter: FilterSection,
    #[serde(default)]
    pub reddit: RedditSection,
    #[serde(default)]
    pub report: ReportSection,
}

/// Crawl bounds and pacing
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlSection {
    /// Subreddits to visit, in order
    pub feeds: Vec<String>,
    /// Hot posts listed per subreddit
    #[serde(default = "default_posts_per_feed")]
    pub posts_per_feed: usize,
    /// Top-level comments ingested per post
    #[serde(default = "default_comments_per_post")]
    pub comments_per_post: usize,
    /// Flat pause between fetch calls, in milliseconds
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,
}

impl Default for CrawlSection {
    fn default() -> Self {
        Self {
            feeds: vec!["wallstreetbets".to_string()],
            posts_per_feed: default_posts_per_feed(),
            comments_per_post: default_comments_per_post(),
            fetch_delay_ms: default_fetch_delay_ms(),
        }
    }
}

fn default_posts_per_feed() -> usize {
    25
}

fn default_comments_per_post() -> usize {
    10
}

fn default_fetch_delay_ms() -> u64 {
    100
}

/// Symbol acceptance policy
#[derive(Debug, Clone, Deserialize)]
pub struct FilterSection {
    /// Extra denylist entries on top of the builtin list
    #[serde(default)]
    pub extra_denylist: Vec<String>,
    /// Optional file replacing the builtin denylist (one token per line)
    #[serde(default)]
    pub denylist_path: Option<String>,
    /// Symbols accepted regardless of length
    #[serde(default)]
    pub known_symbols: Vec<String>,
    /// Minimum length for symbols outside known_symbols
    #[serde(default = "default_min_unknown_len")]
    pub min_unknown_len: usize,
}

impl Default for FilterSection {
    fn default() -> Self {
        Self {
            extra_denylist: Vec::new(),
            denylist_path: None,
            known_symbols: Vec::new(),
            min_unknown_len: default_min_unknown_len(),
        }
    }
}

fn default_min_unknown_len() -> usize {
    1
}

/// Reddit API endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct RedditSection {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RedditSection {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            auth_url: default_auth_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    "https://oauth.reddit.com".to_string()
}

fn default_auth_url() -> String {
    "https://www.reddit.com/api/v1/access_token".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Report shape and destination
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSection {
    /// Number of entries in the final ranking
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Result file path; `~` is expanded
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            output_path: default_output_path(),
        }
    }
}

fn default_top_n() -> usize {
    10
}

fn default_output_path() -> String {
    "top_stocks.txt".to_string()
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.crawl.feeds.is_empty() {
            return Err(ConfigError::Validation(
                "crawl.feeds cannot be empty".to_string(),
            ));
        }

        if self.crawl.feeds.iter().any(|feed| feed.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "crawl.feeds entries cannot be blank".to_string(),
            ));
        }

        if self.crawl.posts_per_feed == 0 {
            return Err(ConfigError::Validation(format!(
                "crawl.posts_per_feed must be > 0, got {}",
                self.crawl.posts_per_feed
            )));
        }

        if self.filter.min_unknown_len == 0 || self.filter.min_unknown_len > MAX_SYMBOL_LEN {
            return Err(ConfigError::Validation(format!(
                "filter.min_unknown_len must be 1-{MAX_SYMBOL_LEN}, got {}",
                self.filter.min_unknown_len
            )));
        }

        if self.reddit.api_url.is_empty() || self.reddit.auth_url.is_empty() {
            return Err(ConfigError::Validation(
                "reddit.api_url and reddit.auth_url cannot be empty".to_string(),
            ));
        }

        if self.reddit.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "reddit.timeout_secs must be > 0".to_string(),
            ));
        }

        if self.report.output_path.is_empty() {
            return Err(ConfigError::Validation(
                "report.output_path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Crawl bounds as a plan for the controller.
    pub fn crawl_plan(&self) -> CrawlPlan {
        CrawlPlan {
            feeds: self.crawl.feeds.clone(),
            posts_per_feed: self.crawl.posts_per_feed,
            comments_per_post: self.crawl.comments_per_post,
        }
    }

    /// Build the symbol acceptance filter from the filter section.
    ///
    /// A configured denylist file replaces the builtin list; extra entries
    /// extend whichever base is active.
    pub fn build_filter(&self) -> Result<SymbolFilter, ConfigError> {
        let mut denylist = match &self.filter.denylist_path {
            Some(path) => {
                let expanded = shellexpand::tilde(path).to_string();
                Denylist::load(expanded)?
            }
            None => Denylist::builtin(),
        };
        denylist.extend(&self.filter.extra_denylist);

        Ok(SymbolFilter::new(denylist)
            .with_known_symbols(&self.filter.known_symbols)
            .with_min_unknown_len(self.filter.min_unknown_len))
    }

    /// Expanded report output path.
    pub fn output_path(&self) -> String {
        shellexpand::tilde(&self.report.output_path).to_string()
    }
}

/// Reddit app credentials pulled from the environment.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

impl Credentials {
    /// Read credentials from the environment.
    ///
    /// REDDIT_CLIENT_ID and REDDIT_CLIENT_SECRET are required; their
    /// absence is a fatal startup error. REDDIT_USER_AGENT falls back to
    /// a default identifying this tool.
    pub fn from_env() -> Result<Self, ConfigError> {
        let client_id = require_env("REDDIT_CLIENT_ID")?;
        let client_secret = require_env("REDDIT_CLIENT_SECRET")?;
        let user_agent = std::env::var("REDDIT_USER_AGENT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            client_id,
            client_secret,
            user_agent,
        })
    }
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingEnv(name))
}
