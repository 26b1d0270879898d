pub mod crawler;

pub use crawler::{CrawlController, CrawlPlan, CrawlSummary};
