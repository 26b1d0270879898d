//! Bounded Crawl Controller
//!
//! Drives the pipeline: for each configured feed, list a bounded number of
//! items, ingest title and body, then ingest a bounded number of top
//! comments. Strictly sequential - one feed, one item, one comment at a
//! time - with the injected wait strategy pacing the fetch calls.
//!
//! Failure policy is log-and-continue: a feed or item that fails to load is
//! skipped and contributes zero mentions. Nothing here aborts the run.

use crate::domain::{SymbolAggregator, TextFragment};
use crate::ports::{FeedSource, WaitStrategy};

/// Crawl bounds and targets.
#[derive(Debug, Clone)]
pub struct CrawlPlan {
    /// Feed names to visit, in order.
    pub feeds: Vec<String>,
    /// Maximum items listed per feed.
    pub posts_per_feed: usize,
    /// Maximum top-level comments ingested per item.
    pub comments_per_post: usize,
}

/// What actually happened during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    pub feeds_crawled: usize,
    pub feeds_skipped: usize,
    pub items_crawled: usize,
    pub items_skipped: usize,
    pub comments_ingested: usize,
}

/// Sequential crawl loop feeding the aggregator.
pub struct CrawlController<F, W> {
    source: F,
    wait: W,
    plan: CrawlPlan,
}

impl<F, W> CrawlController<F, W>
where
    F: FeedSource,
    W: WaitStrategy,
{
    pub fn new(source: F, wait: W, plan: CrawlPlan) -> Self {
        Self { source, wait, plan }
    }

    /// Run one full crawl, ingesting every fragment into `aggregator`.
    pub async fn run(&self, aggregator: &mut SymbolAggregator) -> CrawlSummary {
        let mut summary = CrawlSummary::default();

        for feed in &self.plan.feeds {
            tracing::info!("Crawling r/{feed}...");
            let distinct_before = aggregator.distinct_symbols();

            let items = match self.source.list_items(feed, self.plan.posts_per_feed).await {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!("Skipping r/{feed}: {e}");
                    summary.feeds_skipped += 1;
                    continue;
                }
            };
            summary.feeds_crawled += 1;

            for item in items {
                aggregator.ingest(&TextFragment::title(&item.id, &item.title));
                aggregator.ingest(&TextFragment::body(&item.id, &item.body));

                match self
                    .source
                    .top_comments(&item.id, self.plan.comments_per_post)
                    .await
                {
                    Ok(comments) => {
                        for body in comments {
                            aggregator.ingest(&TextFragment::comment(&item.id, body));
                            summary.comments_ingested += 1;
                        }
                        summary.items_crawled += 1;
                    }
                    Err(e) => {
                        tracing::warn!("Skipping comments for item {}: {e}", item.id);
                        summary.items_skipped += 1;
                    }
                }

                self.wait.wait().await;
            }

            tracing::info!(
                "Found {} new distinct symbols in r/{feed}",
                aggregator.distinct_symbols() - distinct_before
            );
        }

        summary
    }
}
