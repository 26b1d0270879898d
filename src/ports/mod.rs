//! Ports Layer - trait definitions for external dependencies.
//!
//! Following hexagonal architecture, these traits abstract:
//! - Feed access (listing posts and their top comments)
//! - Inter-fetch pacing (the rate-limit delay policy)
//!
//! `mocks` holds scripted test doubles used by unit and integration tests.

pub mod feed;
pub mod mocks;
pub mod wait;

pub use feed::{FeedError, FeedItem, FeedSource};
pub use wait::{FixedDelay, NoWait, WaitStrategy};
