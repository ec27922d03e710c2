//! Batched video detail fetching
//!
//! Splits an ID list into upstream-sized batches, fetches each batch once and
//! flattens the returned items into [`VideoRecord`]s. Field extraction is
//! total: anything missing or malformed becomes an empty string or zero.

use serde_json::Value;
use tracing::{debug, info};

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{VideoId, VideoRecord};
use crate::url::{VIDEOS_ENDPOINT, build_watch_url};

/// Maximum IDs per detail request (upstream hard limit)
pub const DETAIL_BATCH_SIZE: usize = 50;

/// Facets requested for every video
pub const DETAIL_PARTS: &str = "snippet,statistics,contentDetails";

/// Parse a statistic into a count, defaulting to 0
///
/// The API reports counts as decimal strings; plain JSON integers are
/// accepted too. Anything else (missing, negative, fractional text, garbage)
/// yields 0.
pub fn to_count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::String(s)) => s.trim().parse::<u64>().unwrap_or(0),
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    }
}

/// String field or empty
fn text(object: Option<&Value>, key: &str) -> String {
    object
        .and_then(|o| o.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Tag array joined with `|`, empty if absent
fn joined_tags(snippet: Option<&Value>) -> String {
    snippet
        .and_then(|s| s.get("tags"))
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("|")
        })
        .unwrap_or_default()
}

/// Map one `videos` item into a record
///
/// Returns `None` only when the item carries no string `id`.
pub fn parse_video_item(item: &Value) -> Option<VideoRecord> {
    let id = item.get("id").and_then(Value::as_str)?.to_string();

    let snippet = item.get("snippet").filter(|v| v.is_object());
    let statistics = item.get("statistics").filter(|v| v.is_object());
    let content = item.get("contentDetails").filter(|v| v.is_object());

    let stat = |key: &str| to_count(statistics.and_then(|s| s.get(key)));

    Some(VideoRecord {
        url: build_watch_url(&id),
        published_at: text(snippet, "publishedAt"),
        channel_id: text(snippet, "channelId"),
        channel_title: text(snippet, "channelTitle"),
        title: text(snippet, "title"),
        description: text(snippet, "description"),
        tags: joined_tags(snippet),
        category_id: text(snippet, "categoryId"),
        duration: text(content, "duration"),
        view_count: stat("viewCount"),
        like_count: stat("likeCount"),
        comment_count: stat("commentCount"),
        id,
    })
}

/// Records carried by one `videos` response
pub fn parse_video_items(body: &Value) -> Vec<VideoRecord> {
    body.get("items")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| {
            let record = parse_video_item(item);
            if record.is_none() {
                debug!("Skipping detail item without an id");
            }
            record
        })
        .collect()
}

/// Fetch metadata for every ID, one request per batch of at most 50
///
/// Batches are fetched in partition order and records come back grouped by
/// batch. IDs the API does not return (deleted or private videos) produce no
/// record and no error.
///
/// # Errors
/// Propagates terminal fetch errors (`RetriesExhausted`, `UnexpectedStatus`)
pub async fn fetch_details(client: &ApiClient, ids: &[VideoId]) -> Result<Vec<VideoRecord>> {
    let mut records = Vec::with_capacity(ids.len());
    let mut throttle = client.throttle();

    for (index, batch) in ids.chunks(DETAIL_BATCH_SIZE).enumerate() {
        throttle.wait().await;
        info!("Fetching details for batch {}...", index + 1);

        let params = [("part", DETAIL_PARTS.to_string()), ("id", batch.join(","))];
        let body = client.fetch(VIDEOS_ENDPOINT, &params).await?;

        records.extend(parse_video_items(&body));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_count_string() {
        assert_eq!(to_count(Some(&json!("12345"))), 12345);
        assert_eq!(to_count(Some(&json!(" 42 "))), 42);
    }

    #[test]
    fn test_to_count_number() {
        assert_eq!(to_count(Some(&json!(99))), 99);
    }

    #[test]
    fn test_to_count_defaults_to_zero() {
        assert_eq!(to_count(None), 0);
        assert_eq!(to_count(Some(&Value::Null)), 0);
        assert_eq!(to_count(Some(&json!("n/a"))), 0);
        assert_eq!(to_count(Some(&json!("-5"))), 0);
        assert_eq!(to_count(Some(&json!(-5))), 0);
        assert_eq!(to_count(Some(&json!("1.5"))), 0);
        assert_eq!(to_count(Some(&json!(true))), 0);
        assert_eq!(to_count(Some(&json!(["1"]))), 0);
    }

    #[test]
    fn test_parse_full_item() {
        let item = json!({
            "kind": "youtube#video",
            "id": "vid001",
            "snippet": {
                "publishedAt": "2025-02-01T10:00:00Z",
                "channelId": "UC123",
                "channelTitle": "Synthetic Studio",
                "title": "AI Generated Short Film",
                "description": "Made with Sora",
                "tags": ["sora", "short film", "ai"],
                "categoryId": "1"
            },
            "contentDetails": {"duration": "PT4M13S"},
            "statistics": {"viewCount": "1000", "likeCount": "50", "commentCount": "7"}
        });

        let record = parse_video_item(&item).unwrap();
        assert_eq!(record.id, "vid001");
        assert_eq!(record.published_at, "2025-02-01T10:00:00Z");
        assert_eq!(record.channel_id, "UC123");
        assert_eq!(record.channel_title, "Synthetic Studio");
        assert_eq!(record.title, "AI Generated Short Film");
        assert_eq!(record.description, "Made with Sora");
        assert_eq!(record.tags, "sora|short film|ai");
        assert_eq!(record.category_id, "1");
        assert_eq!(record.duration, "PT4M13S");
        assert_eq!(record.view_count, 1000);
        assert_eq!(record.like_count, 50);
        assert_eq!(record.comment_count, 7);
        assert_eq!(record.url, "https://www.youtube.com/watch?v=vid001");
    }

    #[test]
    fn test_parse_sparse_item() {
        // Likes hidden, comments disabled, no tags
        let item = json!({
            "id": "vid002",
            "snippet": {"title": "Untitled"},
            "statistics": {"viewCount": "3"}
        });

        let record = parse_video_item(&item).unwrap();
        assert_eq!(record.title, "Untitled");
        assert_eq!(record.description, "");
        assert_eq!(record.tags, "");
        assert_eq!(record.duration, "");
        assert_eq!(record.view_count, 3);
        assert_eq!(record.like_count, 0);
        assert_eq!(record.comment_count, 0);
    }

    #[test]
    fn test_parse_item_with_null_facets() {
        let item = json!({"id": "vid003", "snippet": null, "statistics": null, "contentDetails": null});
        let record = parse_video_item(&item).unwrap();
        assert_eq!(record.id, "vid003");
        assert_eq!(record.title, "");
        assert_eq!(record.view_count, 0);
    }

    #[test]
    fn test_parse_item_without_id() {
        assert_eq!(parse_video_item(&json!({"snippet": {"title": "x"}})), None);
        assert_eq!(parse_video_item(&json!({"id": 5})), None);
    }

    #[test]
    fn test_parse_video_items() {
        let body = json!({
            "items": [
                {"id": "a"},
                {"snippet": {"title": "orphan"}},
                {"id": "b"}
            ]
        });
        let ids: Vec<String> = parse_video_items(&body).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_video_items_empty_response() {
        assert!(parse_video_items(&json!({})).is_empty());
        assert!(parse_video_items(&json!({"items": []})).is_empty());
    }
}
