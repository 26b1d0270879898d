//! Reddit Adapter
//!
//! Implements the `FeedSource` port against Reddit's OAuth2 listing API.

pub mod client;
pub mod listing;

pub use client::{RedditClient, RedditConfig, RedditCredentials};
