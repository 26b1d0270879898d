//! wsb-lurker - Reddit Stock Mention Crawler Library
//!
//! Crawls a configured set of stock subreddits, extracts ticker-shaped
//! tokens from post titles, bodies and top comments, and ranks symbols by
//! mention count.
//!
//! # Modules
//!
//! - `domain`: Pure core (Symbol, extractor, denylist filter, aggregator)
//! - `ports`: Trait abstractions (FeedSource, WaitStrategy) and mocks
//! - `adapters`: External implementations (Reddit, report output, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Bounded crawl controller

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
