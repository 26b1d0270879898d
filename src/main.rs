//! wsb-lurker - Reddit Stock Mention Crawler
//!
//! One crawl cycle: list hot posts from the configured subreddits, count
//! ticker mentions across titles, bodies and top comments, report the top N.

use std::io::Read;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use wsb_lurker::adapters::cli::{CliApp, Command, RunCmd, ScanCmd};
use wsb_lurker::adapters::reddit::{RedditClient, RedditConfig, RedditCredentials};
use wsb_lurker::adapters::report;
use wsb_lurker::application::CrawlController;
use wsb_lurker::config::{load_config, Credentials};
use wsb_lurker::domain::{SymbolAggregator, SymbolFilter, TextFragment};
use wsb_lurker::ports::FixedDelay;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present (credentials go here, not in config TOML)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    init_logging(app.verbose, app.debug);

    match app.command.unwrap_or_default() {
        Command::Run(cmd) => run_command(cmd).await,
        Command::Scan(cmd) => scan_command(cmd).await,
    }
}

/// Initialize logging system
fn init_logging(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt().with_env_filter(filter).with_target(false).init();
}

/// Handle run command: one full crawl-and-report cycle
async fn run_command(cmd: RunCmd) -> Result<()> {
    let config = load_config(&cmd.config).with_context(|| {
        format!("failed to load configuration from {}", cmd.config.display())
    })?;

    // Setup failures are fatal: bad credentials or an unreachable token
    // endpoint abort the run before any crawling starts.
    let credentials =
        Credentials::from_env().context("Reddit API credentials are required")?;
    let filter = config.build_filter().context("failed to build symbol filter")?;

    let reddit_config = RedditConfig {
        api_base_url: config.reddit.api_url.clone(),
        auth_url: config.reddit.auth_url.clone(),
        user_agent: credentials.user_agent.clone(),
        timeout: Duration::from_secs(config.reddit.timeout_secs),
    };
    let client = RedditClient::connect(
        reddit_config,
        &RedditCredentials {
            client_id: credentials.client_id,
            client_secret: credentials.client_secret,
        },
    )
    .await
    .context("failed to authenticate against the Reddit API")?;

    tracing::info!("Starting Reddit stock symbol crawl...");
    let controller = CrawlController::new(
        client,
        FixedDelay::from_millis(config.crawl.fetch_delay_ms),
        config.crawl_plan(),
    );

    let mut aggregator = SymbolAggregator::new(filter);
    let summary = controller.run(&mut aggregator).await;
    tracing::info!(
        "Crawl finished: {} feeds, {} items, {} comments ({} items skipped)",
        summary.feeds_crawled,
        summary.items_crawled,
        summary.comments_ingested,
        summary.items_skipped
    );

    let top_n = cmd.top.unwrap_or(config.report.top_n);
    let ranking = aggregator.rank(top_n);
    let rendered = report::render(&ranking, aggregator.distinct_symbols());

    let output_path = match cmd.output {
        Some(path) => path.display().to_string(),
        None => config.output_path(),
    };
    report::emit(&output_path, &rendered)
        .with_context(|| format!("failed to write report to {output_path}"))?;
    tracing::info!("Results saved to {output_path}");

    Ok(())
}

/// Handle scan command: rank symbols from local text, no network
async fn scan_command(cmd: ScanCmd) -> Result<()> {
    let filter = match &cmd.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?
            .build_filter()?,
        None => SymbolFilter::default(),
    };

    let text = match &cmd.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let mut aggregator = SymbolAggregator::new(filter);
    for (index, line) in text.lines().enumerate() {
        aggregator.ingest(&TextFragment::body(format!("line-{}", index + 1), line));
    }

    let ranking = aggregator.rank(cmd.top);
    print!("{}", report::render(&ranking, aggregator.distinct_symbols()));

    Ok(())
}
