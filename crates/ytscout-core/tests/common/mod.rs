//! Shared helpers for mock-server tests

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::{MockServer, Request};
use ytscout_core::{ApiClient, ApiKey, ClientConfig};

pub const TEST_KEY: &str = "test-key";

/// Client pointed at the mock server with millisecond backoff and no throttle
pub fn fast_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        backoff_unit: Duration::from_millis(1),
        request_delay: Duration::ZERO,
        ..ClientConfig::default()
    }
}

pub fn fast_client(server: &MockServer) -> ApiClient {
    ApiClient::with_config(ApiKey::new(TEST_KEY), fast_config(server)).unwrap()
}

/// Value of a query parameter on a recorded request
pub fn query_value(request: &Request, name: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

/// A search page with the given IDs and optional continuation token
pub fn search_page(ids: &[&str], next: Option<&str>) -> Value {
    let items: Vec<Value> = ids
        .iter()
        .map(|id| json!({"kind": "youtube#searchResult", "id": {"kind": "youtube#video", "videoId": id}}))
        .collect();
    let mut page = json!({"kind": "youtube#searchListResponse", "items": items});
    if let Some(token) = next {
        page["nextPageToken"] = json!(token);
    }
    page
}

/// A `videos` item with a title and string statistics
pub fn video_item(id: &str, title: &str) -> Value {
    json!({
        "kind": "youtube#video",
        "id": id,
        "snippet": {
            "publishedAt": "2025-03-01T00:00:00Z",
            "channelId": "UCmock",
            "channelTitle": "Mock Channel",
            "title": title,
            "description": "",
            "tags": ["ai"],
            "categoryId": "28"
        },
        "contentDetails": {"duration": "PT30S"},
        "statistics": {"viewCount": "100", "likeCount": "10", "commentCount": "1"}
    })
}
