//! URL and parameter helpers for the YouTube Data API
//!
//! Provides endpoint names, watch URLs, timestamp formatting and the default
//! OR-joined search query.

use chrono::{DateTime, Utc};

/// Listing endpoint used by the ID collector
pub const SEARCH_ENDPOINT: &str = "search";

/// Batch-detail endpoint used by the detail batcher
pub const VIDEOS_ENDPOINT: &str = "videos";

const WATCH_URL: &str = "https://www.youtube.com/watch";

/// Keywords OR-joined into the default search query
pub const SEARCH_KEYWORDS: &[&str] = &[
    "ai generated",
    "ai video",
    "text-to-video",
    "sora",
    "runway gen-3",
    "pika labs",
    "gen-3",
    "midjourney video",
    "luma ai",
    "google veo",
    "synthesia",
    "heygen",
    "kaiber",
    "stable video diffusion",
    "d-id",
];

/// Builds the canonical watch URL for a video
///
/// # Example
/// ```
/// use ytscout_core::url::build_watch_url;
/// let url = build_watch_url("dQw4w9WgXcQ");
/// assert_eq!(url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
/// ```
pub fn build_watch_url(id: &str) -> String {
    format!("{}?v={}", WATCH_URL, urlencoding::encode(id))
}

/// Formats a UTC instant the way `publishedAfter` expects
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use ytscout_core::url::format_timestamp;
/// let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
/// assert_eq!(format_timestamp(ts), "2024-01-02T03:04:05Z");
/// ```
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Builds a query matching any of the phrases
///
/// Each phrase is double-quoted and the phrases are joined with ` | `.
pub fn build_or_query(phrases: &[&str]) -> String {
    phrases
        .iter()
        .map(|p| format!("\"{}\"", p))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// The query used when none is supplied
pub fn default_search_query() -> String {
    build_or_query(SEARCH_KEYWORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_watch_url() {
        assert_eq!(
            build_watch_url("abc_123-XY"),
            "https://www.youtube.com/watch?v=abc_123-XY"
        );
    }

    #[test]
    fn test_build_watch_url_encodes() {
        assert_eq!(
            build_watch_url("a b&c"),
            "https://www.youtube.com/watch?v=a%20b%26c"
        );
    }

    #[test]
    fn test_build_or_query() {
        assert_eq!(build_or_query(&["sora", "ai video"]), "\"sora\" | \"ai video\"");
        assert_eq!(build_or_query(&[]), "");
    }

    #[test]
    fn test_default_search_query() {
        let query = default_search_query();
        assert!(query.starts_with("\"ai generated\" | \"ai video\""));
        assert!(query.ends_with("\"d-id\""));
        assert_eq!(query.matches(" | ").count(), SEARCH_KEYWORDS.len() - 1);
    }
}
