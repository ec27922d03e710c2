//! Core data types for ytscout
//!
//! Contains the search description consumed by the ID collector and the
//! normalized video record produced by the detail batcher.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::classifier::ContentTagSet;
use crate::error::{Result, ScoutError};
use crate::url::format_timestamp;

/// Opaque video identifier
pub type VideoId = String;

/// Lookback window used when no start date is given
pub const DEFAULT_LOOKBACK_DAYS: u32 = 90;

/// Lower bound on publication time for a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublishedAfter {
    /// Midnight UTC of an explicit start date
    Date(NaiveDate),
    /// Now minus this many days
    LookbackDays(u32),
}

impl PublishedAfter {
    /// Pick the effective bound: an explicit date takes precedence over days
    pub fn resolve(start_date: Option<NaiveDate>, days: u32) -> Self {
        match start_date {
            Some(date) => Self::Date(date),
            None => Self::LookbackDays(days),
        }
    }

    /// Parse a `YYYY-MM-DD` start date
    ///
    /// # Errors
    /// Returns `InvalidDate` if the text is not a calendar date
    pub fn parse_date(text: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map_err(|_| ScoutError::InvalidDate(text.to_string()))
    }

    /// RFC 3339 timestamp for the `publishedAfter` parameter
    pub fn to_timestamp(&self, now: DateTime<Utc>) -> String {
        match self {
            Self::Date(date) => format!("{}T00:00:00Z", date.format("%Y-%m-%d")),
            Self::LookbackDays(days) => format_timestamp(
                now.checked_sub_signed(Duration::days(i64::from(*days)))
                    .unwrap_or(DateTime::<Utc>::MIN_UTC),
            ),
        }
    }
}

impl Default for PublishedAfter {
    fn default() -> Self {
        Self::LookbackDays(DEFAULT_LOOKBACK_DAYS)
    }
}

/// Describes one search run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query, `|` acts as OR upstream
    pub query: String,

    /// Publication lower bound
    pub published_after: PublishedAfter,

    /// Relevance language (e.g., "en", "id")
    pub language: Option<String>,

    /// Region code (e.g., "US", "ID")
    pub region: Option<String>,

    /// Video category filter
    pub category_id: Option<String>,

    /// Number of unique IDs wanted, always > 0
    pub max_results: usize,
}

impl SearchQuery {
    /// Create a query with the default lookback and no filters
    ///
    /// # Errors
    /// Returns `InvalidQuery` if `max_results` is zero
    pub fn new(query: impl Into<String>, max_results: usize) -> Result<Self> {
        if max_results == 0 {
            return Err(ScoutError::InvalidQuery(
                "Target result count must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            query: query.into(),
            published_after: PublishedAfter::default(),
            language: None,
            region: None,
            category_id: None,
            max_results,
        })
    }

    pub fn published_after(mut self, published_after: PublishedAfter) -> Self {
        self.published_after = published_after;
        self
    }

    pub fn language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn category_id(mut self, category_id: Option<String>) -> Self {
        self.category_id = category_id;
        self
    }
}

/// Normalized metadata for one video
///
/// Missing upstream fields are empty strings or zero counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    #[serde(rename = "videoId")]
    pub id: VideoId,
    pub published_at: String,
    pub channel_id: String,
    pub channel_title: String,
    pub title: String,
    pub description: String,

    /// Tags joined with `|`, empty if none
    pub tags: String,

    pub category_id: String,

    /// ISO 8601 duration code (e.g., "PT4M13S")
    pub duration: String,

    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,

    /// Canonical watch URL
    pub url: String,
}

/// A video record paired with its content tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedVideo {
    #[serde(flatten)]
    pub record: VideoRecord,
    pub content_tags: ContentTagSet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_search_query_rejects_zero_target() {
        let result = SearchQuery::new("ai video", 0);
        match result {
            Err(ScoutError::InvalidQuery(msg)) => assert!(msg.contains("zero")),
            _ => panic!("Expected InvalidQuery error"),
        }
    }

    #[test]
    fn test_search_query_defaults() {
        let query = SearchQuery::new("ai video", 10).unwrap();
        assert_eq!(query.published_after, PublishedAfter::LookbackDays(90));
        assert_eq!(query.language, None);
        assert_eq!(query.region, None);
        assert_eq!(query.category_id, None);
    }

    #[test]
    fn test_explicit_date_takes_precedence() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(
            PublishedAfter::resolve(Some(date), 30),
            PublishedAfter::Date(date)
        );
        assert_eq!(
            PublishedAfter::resolve(None, 30),
            PublishedAfter::LookbackDays(30)
        );
    }

    #[test]
    fn test_date_timestamp_is_midnight() {
        let date = PublishedAfter::parse_date("2024-05-01").unwrap();
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(
            PublishedAfter::Date(date).to_timestamp(now),
            "2024-05-01T00:00:00Z"
        );
    }

    #[test]
    fn test_lookback_timestamp() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 8, 30, 15).unwrap();
        assert_eq!(
            PublishedAfter::LookbackDays(10).to_timestamp(now),
            "2025-02-28T08:30:15Z"
        );
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(matches!(
            PublishedAfter::parse_date("2024-13-01"),
            Err(ScoutError::InvalidDate(_))
        ));
        assert!(matches!(
            PublishedAfter::parse_date("yesterday"),
            Err(ScoutError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_video_record_serializes_with_upstream_names() {
        let record = VideoRecord {
            id: "abc123".to_string(),
            view_count: 7,
            ..VideoRecord::default()
        };
        let json = serde_json::to_value(&record).expect("Serialization should succeed");
        assert_eq!(json["videoId"], "abc123");
        assert_eq!(json["viewCount"], 7);
        assert_eq!(json["channelTitle"], "");
    }
}
