//! Main ytscout API
//!
//! Combines the resilient client with the collection, detail and
//! classification stages.

use indexmap::IndexSet;

use crate::classifier::classify_all;
use crate::client::{ApiClient, ClientConfig};
use crate::collector::collect_ids;
use crate::config::ApiKey;
use crate::details::fetch_details;
use crate::error::Result;
use crate::types::{ClassifiedVideo, SearchQuery, VideoId, VideoRecord};

/// Main ytscout API
///
/// Owns one [`ApiClient`]; every stage runs its requests sequentially
/// through it.
pub struct YouTubeScout {
    client: ApiClient,
}

impl YouTubeScout {
    /// Create a new scout with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new(api_key: ApiKey) -> Result<Self> {
        let client = ApiClient::new(api_key)?;
        Ok(Self { client })
    }

    /// Create a new scout with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(api_key: ApiKey, config: ClientConfig) -> Result<Self> {
        let client = ApiClient::with_config(api_key, config)?;
        Ok(Self { client })
    }

    /// Collect up to `query.max_results` unique video IDs
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> ytscout_core::Result<()> {
    /// use ytscout_core::{ApiKey, SearchQuery, YouTubeScout};
    /// let scout = YouTubeScout::new(ApiKey::from_env()?)?;
    /// let query = SearchQuery::new("\"ai video\" | \"sora\"", 100)?;
    /// let ids = scout.collect_ids(&query).await?;
    /// assert!(ids.len() <= 100);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn collect_ids(&self, query: &SearchQuery) -> Result<IndexSet<VideoId>> {
        collect_ids(&self.client, query).await
    }

    /// Fetch metadata records for the given IDs in batches of 50
    pub async fn fetch_details(&self, ids: &[VideoId]) -> Result<Vec<VideoRecord>> {
        fetch_details(&self.client, ids).await
    }

    /// Fetch metadata and attach content tags to every record
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> ytscout_core::Result<()> {
    /// use ytscout_core::{ApiKey, YouTubeScout};
    /// let scout = YouTubeScout::new(ApiKey::from_env()?)?;
    /// let videos = scout.fetch_classified(&["dQw4w9WgXcQ".to_string()]).await?;
    /// for video in &videos {
    ///     println!("{}: {}", video.record.title, video.content_tags);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_classified(&self, ids: &[VideoId]) -> Result<Vec<ClassifiedVideo>> {
        let records = self.fetch_details(ids).await?;
        Ok(classify_all(records))
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}
