//! Scripted test doubles for the ports layer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::feed::{FeedError, FeedItem, FeedSource};

/// Mock feed source that serves scripted listings/comments and records
/// every call made against it. Clones share state, so a clone kept aside
/// can still inspect calls after the source value moves into a controller.
#[derive(Debug, Clone, Default)]
pub struct MockFeedSource {
    calls: Arc<Mutex<Vec<String>>>,
    items: Arc<Mutex<HashMap<String, Vec<FeedItem>>>>,
    comments: Arc<Mutex<HashMap<String, Vec<String>>>>,
    failing_feeds: Arc<Mutex<Vec<String>>>,
    failing_items: Arc<Mutex<Vec<String>>>,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to append an item to a feed's listing
    pub fn with_item(self, feed: &str, item: FeedItem) -> Self {
        self.items
            .lock()
            .unwrap()
            .entry(feed.to_string())
            .or_default()
            .push(item);
        self
    }

    /// Builder method to script the comments returned for an item
    pub fn with_comments(self, item_id: &str, comments: &[&str]) -> Self {
        self.comments.lock().unwrap().insert(
            item_id.to_string(),
            comments.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    /// Builder method to make a whole feed fail to list
    pub fn with_failing_feed(self, feed: &str) -> Self {
        self.failing_feeds.lock().unwrap().push(feed.to_string());
        self
    }

    /// Builder method to make an item's comment fetch fail
    pub fn with_failing_item(self, item_id: &str) -> Self {
        self.failing_items.lock().unwrap().push(item_id.to_string());
        self
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn list_items(&self, feed: &str, limit: usize) -> Result<Vec<FeedItem>, FeedError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("list_items:{feed}:{limit}"));
        if self.failing_feeds.lock().unwrap().contains(&feed.to_string()) {
            return Err(FeedError::Request(format!("feed {feed} unavailable")));
        }
        let items = self
            .items
            .lock()
            .unwrap()
            .get(feed)
            .cloned()
            .unwrap_or_default();
        Ok(items.into_iter().take(limit).collect())
    }

    async fn top_comments(
        &self,
        item_id: &str,
        limit: usize,
    ) -> Result<Vec<String>, FeedError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("top_comments:{item_id}:{limit}"));
        if self
            .failing_items
            .lock()
            .unwrap()
            .contains(&item_id.to_string())
        {
            return Err(FeedError::Request(format!("item {item_id} unavailable")));
        }
        let comments = self
            .comments
            .lock()
            .unwrap()
            .get(item_id)
            .cloned()
            .unwrap_or_default();
        Ok(comments.into_iter().take(limit).collect())
    }
}
