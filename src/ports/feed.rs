//! Feed source port - read-only access to named content feeds.

use async_trait::async_trait;
use thiserror::Error;

/// Feed access error type
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected response shape: {0}")]
    Parse(String),
}

/// One discrete unit of content listed from a feed.
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl FeedItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Feed source port trait
///
/// The crawl controller only ever reads through this seam, so the
/// aggregation core can be exercised with synthetic fragments and no
/// network dependency.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// List up to `limit` current items from the named feed.
    async fn list_items(&self, feed: &str, limit: usize) -> Result<Vec<FeedItem>, FeedError>;

    /// Fetch up to `limit` top-level comment bodies for one item.
    async fn top_comments(&self, item_id: &str, limit: usize)
        -> Result<Vec<String>, FeedError>;
}
