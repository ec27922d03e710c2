//! ytscout Core Library
//!
//! Collects candidate video IDs from the YouTube Data API search listing,
//! fetches their metadata in batches and tags each video with content
//! categories by keyword matching.
//!
//! # Overview
//!
//! - Resilient HTTP client with credential injection and exponential backoff
//!   on quota and transient server errors
//! - Paginated ID collector bounded by a target count
//! - Batched detail fetcher with total, default-on-missing field extraction
//! - Pure multi-label keyword classifier
//!
//! # Example
//!
//! ```no_run
//! use ytscout_core::{ApiKey, Result, SearchQuery, YouTubeScout};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let scout = YouTubeScout::new(ApiKey::from_env()?)?;
//!
//!     // Gather IDs
//!     let query = SearchQuery::new("\"sora\" | \"ai video\"", 100)?;
//!     let ids: Vec<String> = scout.collect_ids(&query).await?.into_iter().collect();
//!
//!     // Fetch details and classify
//!     for video in scout.fetch_classified(&ids).await? {
//!         println!("{} -> {}", video.record.title, video.content_tags);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Quota
//!
//! Each search page costs 100 quota units and each detail batch costs 1.
//! The collector logs an estimate before it starts but never enforces a
//! budget.

pub mod classifier;
mod client;
pub mod collector;
mod config;
pub mod details;
mod error;
pub mod output;
mod scout;
mod types;
pub mod url;

// Re-export client types
pub use client::{ApiClient, ClientConfig, Throttle};

// Re-export credential loading
pub use config::{API_KEY_ENV, ApiKey};

// Re-export error types
pub use error::{Result, ScoutError};

// Re-export stage functions
pub use classifier::{ContentTag, ContentTagSet, classify, classify_all, classify_text};
pub use collector::{QuotaEstimate, collect_ids, estimate_search_cost};
pub use details::fetch_details;

// Re-export main API
pub use scout::YouTubeScout;

// Re-export data types
pub use types::{ClassifiedVideo, PublishedAfter, SearchQuery, VideoId, VideoRecord};
