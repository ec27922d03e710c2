//! Paginated video ID collection
//!
//! Walks the search listing page by page, accumulating unique IDs until the
//! target count is reached or upstream runs out of pages.

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde_json::Value;
use tracing::info;

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{SearchQuery, VideoId};
use crate::url::SEARCH_ENDPOINT;

/// Results requested per search page (upstream maximum)
pub const SEARCH_PAGE_SIZE: usize = 50;

/// Quota units charged per search page
pub const SEARCH_PAGE_COST: usize = 100;

/// Advisory quota figure for a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaEstimate {
    pub pages: usize,
    pub units: usize,
}

/// Estimate the quota a search for `max_results` IDs will consume
pub fn estimate_search_cost(max_results: usize) -> QuotaEstimate {
    let pages = max_results.div_ceil(SEARCH_PAGE_SIZE);
    QuotaEstimate {
        pages,
        units: pages * SEARCH_PAGE_COST,
    }
}

/// Base parameter set shared by every page of a search
pub fn search_params(query: &SearchQuery, now: DateTime<Utc>) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("part", "id".to_string()),
        ("q", query.query.clone()),
        ("type", "video".to_string()),
        ("maxResults", SEARCH_PAGE_SIZE.to_string()),
        ("order", "relevance".to_string()),
        ("publishedAfter", query.published_after.to_timestamp(now)),
    ];

    if let Some(lang) = &query.language {
        params.push(("relevanceLanguage", lang.clone()));
    }
    if let Some(region) = &query.region {
        params.push(("regionCode", region.clone()));
    }
    if let Some(category) = &query.category_id {
        params.push(("videoCategoryId", category.clone()));
    }

    params
}

/// IDs carried by one search page (`items[].id.videoId`)
fn page_video_ids(page: &Value) -> impl Iterator<Item = &str> {
    page.get("items")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| item.get("id")?.get("videoId")?.as_str())
        .filter(|id| !id.is_empty())
}

/// Continuation token of a search page, if any
fn next_page_token(page: &Value) -> Option<String> {
    page.get("nextPageToken")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Collect up to `query.max_results` unique video IDs
///
/// Pages are fetched strictly in continuation order. The returned set keeps
/// first-seen order and holds at most `max_results` IDs, fewer when upstream
/// results are exhausted first.
///
/// # Errors
/// Propagates terminal fetch errors (`RetriesExhausted`, `UnexpectedStatus`)
pub async fn collect_ids(client: &ApiClient, query: &SearchQuery) -> Result<IndexSet<VideoId>> {
    collect_ids_since(client, query, Utc::now()).await
}

/// Same as [`collect_ids`] with an explicit clock for the lookback window
pub async fn collect_ids_since(
    client: &ApiClient,
    query: &SearchQuery,
    now: DateTime<Utc>,
) -> Result<IndexSet<VideoId>> {
    let base_params = search_params(query, now);

    let estimate = estimate_search_cost(query.max_results);
    info!(
        "Estimated quota cost for search: {} pages * {} units = {} units",
        estimate.pages, SEARCH_PAGE_COST, estimate.units
    );

    let mut found: IndexSet<VideoId> = IndexSet::new();
    let mut page_token: Option<String> = None;
    let mut throttle = client.throttle();

    while found.len() < query.max_results {
        throttle.wait().await;

        let mut params = base_params.clone();
        if let Some(token) = page_token.take() {
            params.push(("pageToken", token));
        }

        let page = client.fetch(SEARCH_ENDPOINT, &params).await?;

        for id in page_video_ids(&page) {
            found.insert(id.to_string());
        }
        info!("Found {} unique video IDs so far...", found.len());

        match next_page_token(&page) {
            Some(token) => page_token = Some(token),
            None => {
                info!("Reached the end of search results");
                break;
            }
        }
    }

    found.truncate(query.max_results);
    Ok(found)
}
