//! End-to-end crawl tests.
//!
//! Drive the whole pipeline - crawl controller, extractor, denylist filter,
//! aggregator, report rendering - through the scripted mock feed source.
//! All tests are deterministic: no network calls, no delays.

use wsb_lurker::adapters::report;
use wsb_lurker::application::{CrawlController, CrawlPlan, CrawlSummary};
use wsb_lurker::domain::{Denylist, SymbolAggregator, SymbolFilter};
use wsb_lurker::ports::mocks::MockFeedSource;
use wsb_lurker::ports::{FeedItem, NoWait};

fn scripted_source() -> MockFeedSource {
    MockFeedSource::new()
        .with_item(
            "wallstreetbets",
            FeedItem::new("p1", "I love $TSLA and TSLA", ""),
        )
        .with_item(
            "wallstreetbets",
            FeedItem::new("p2", "AAPL AAPL GME", "THE best stock is GME"),
        )
        .with_comments("p1", &["GME going up", "YOLO on TSLA"])
        .with_item("stocks", FeedItem::new("p3", "Watching NVDA today", "NVDA NVDA"))
        .with_failing_item("p3")
        .with_failing_feed("deadsub")
}

fn crawl_plan() -> CrawlPlan {
    CrawlPlan {
        feeds: vec![
            "wallstreetbets".to_string(),
            "stocks".to_string(),
            "deadsub".to_string(),
        ],
        posts_per_feed: 25,
        comments_per_post: 10,
    }
}

async fn run_crawl() -> (SymbolAggregator, CrawlSummary) {
    let controller = CrawlController::new(scripted_source(), NoWait, crawl_plan());
    let mut aggregator = SymbolAggregator::new(SymbolFilter::new(Denylist::builtin()));
    let summary = controller.run(&mut aggregator).await;
    (aggregator, summary)
}

#[tokio::test]
async fn test_full_crawl_counts_and_ranking() {
    let (aggregator, summary) = run_crawl().await;

    assert_eq!(summary.feeds_crawled, 2);
    assert_eq!(summary.feeds_skipped, 1);
    assert_eq!(summary.items_crawled, 2);
    assert_eq!(summary.items_skipped, 1);
    assert_eq!(summary.comments_ingested, 2);

    // THE, YOLO and the lone I are denylisted; everything else counts per
    // occurrence. The failing comment fetch on p3 leaves its title/body
    // counts in place.
    let ranking: Vec<(String, u64)> = aggregator
        .rank(10)
        .into_iter()
        .map(|e| (e.symbol.to_string(), e.count))
        .collect();

    assert_eq!(
        ranking,
        vec![
            ("TSLA".to_string(), 3),
            ("GME".to_string(), 3),
            ("NVDA".to_string(), 3),
            ("AAPL".to_string(), 2),
        ]
    );
}

#[tokio::test]
async fn test_rank_limit_truncates() {
    let (aggregator, _) = run_crawl().await;

    let top_two = aggregator.rank(2);
    assert_eq!(top_two.len(), 2);
    assert_eq!(top_two[0].symbol.as_str(), "TSLA");
    assert_eq!(top_two[1].symbol.as_str(), "GME");

    assert!(aggregator.rank(0).is_empty());
}

#[tokio::test]
async fn test_report_renders_ranked_lines() {
    let (aggregator, _) = run_crawl().await;

    let rendered = report::render(&aggregator.rank(10), aggregator.distinct_symbols());

    assert!(rendered.contains(" 1. $TSLA   -    3 mentions"));
    assert!(rendered.contains(" 4. $AAPL   -    2 mentions"));
    assert!(rendered.contains("Total unique symbols found: 4"));
}

#[tokio::test]
async fn test_crawl_with_no_matches_reports_empty() {
    let source = MockFeedSource::new().with_item(
        "wallstreetbets",
        FeedItem::new("p1", "nothing shouted here", "all lowercase text"),
    );
    let controller = CrawlController::new(
        source,
        NoWait,
        CrawlPlan {
            feeds: vec!["wallstreetbets".to_string()],
            posts_per_feed: 25,
            comments_per_post: 10,
        },
    );

    let mut aggregator = SymbolAggregator::new(SymbolFilter::new(Denylist::builtin()));
    let summary = controller.run(&mut aggregator).await;

    assert_eq!(summary.items_crawled, 1);
    assert_eq!(aggregator.distinct_symbols(), 0);

    let rendered = report::render(&aggregator.rank(10), 0);
    assert!(rendered.contains("Total unique symbols found: 0"));
}
