//! Reddit API Client
//!
//! Script-type OAuth2 client for Reddit's read-only listing endpoints.
//! Exchanges the app credentials for a bearer token once at startup, then
//! serves hot-post listings and top-level comments over that token.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::ports::feed::{FeedError, FeedItem, FeedSource};

use super::listing::{CommentListing, PostListing, TokenResponse, KIND_COMMENT, KIND_POST};

/// Reddit API client configuration
#[derive(Debug, Clone)]
pub struct RedditConfig {
    /// Base URL for authenticated listing reads
    pub api_base_url: String,
    /// OAuth2 token endpoint
    pub auth_url: String,
    /// User-agent string; Reddit rejects unidentified clients
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://oauth.reddit.com".to_string(),
            auth_url: "https://www.reddit.com/api/v1/access_token".to_string(),
            user_agent: "wsb-lurker/0.1".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Reddit app credentials (script type).
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Authenticated read-only Reddit client
#[derive(Debug, Clone)]
pub struct RedditClient {
    config: RedditConfig,
    http: Client,
    token: String,
}

impl RedditClient {
    /// Build the HTTP client and exchange credentials for a bearer token.
    ///
    /// Token exchange happens eagerly so that bad credentials surface as a
    /// startup failure instead of failing every listing call later.
    pub async fn connect(
        config: RedditConfig,
        credentials: &RedditCredentials,
    ) -> Result<Self, FeedError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| FeedError::Request(format!("failed to build HTTP client: {e}")))?;

        let token = Self::fetch_token(&http, &config, credentials).await?;
        tracing::info!("Reddit API authentication succeeded");

        Ok(Self {
            config,
            http,
            token,
        })
    }

    async fn fetch_token(
        http: &Client,
        config: &RedditConfig,
        credentials: &RedditCredentials,
    ) -> Result<String, FeedError> {
        let response = http
            .post(&config.auth_url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| FeedError::Auth(format!("token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Auth(format!(
                "token endpoint returned {status} - check the Reddit app credentials"
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| FeedError::Parse(format!("token response: {e}")))?;

        if token.access_token.is_empty() {
            return Err(FeedError::Auth("token endpoint returned an empty token".into()));
        }

        Ok(token.access_token)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FeedError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await
            .map_err(|e| FeedError::Request(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(FeedError::Auth(format!("{url} returned {status}")));
        }
        if !status.is_success() {
            return Err(FeedError::Request(format!("{url} returned {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| FeedError::Parse(format!("{url}: {e}")))
    }

    /// Get the configured API base URL
    pub fn api_base_url(&self) -> &str {
        &self.config.api_base_url
    }
}

#[async_trait]
impl FeedSource for RedditClient {
    async fn list_items(&self, feed: &str, limit: usize) -> Result<Vec<FeedItem>, FeedError> {
        let url = format!("{}/r/{}/hot", self.config.api_base_url, feed);
        let listing: PostListing = self
            .get_json(
                &url,
                &[
                    ("limit", limit.to_string()),
                    ("raw_json", "1".to_string()),
                ],
            )
            .await?;

        Ok(listing
            .data
            .children
            .into_iter()
            .filter(|thing| thing.kind == KIND_POST)
            .map(|thing| thing.data.into())
            .collect())
    }

    async fn top_comments(
        &self,
        item_id: &str,
        limit: usize,
    ) -> Result<Vec<String>, FeedError> {
        let url = format!("{}/comments/{}", self.config.api_base_url, item_id);
        let listings: Vec<CommentListing> = self
            .get_json(
                &url,
                &[
                    ("limit", limit.to_string()),
                    ("depth", "1".to_string()),
                    ("raw_json", "1".to_string()),
                ],
            )
            .await?;

        // Element 0 is the post itself; element 1 holds the comment tree.
        let children = listings
            .into_iter()
            .nth(1)
            .map(|listing| listing.data.children)
            .unwrap_or_default();

        Ok(children
            .into_iter()
            .filter(|thing| thing.kind == KIND_COMMENT)
            .map(|thing| thing.data.body)
            .filter(|body| !body.is_empty())
            .take(limit)
            .collect())
    }
}
