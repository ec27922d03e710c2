//! HTTP client with retry logic for the YouTube Data API
//!
//! Provides the resilient fetch primitive shared by the ID collector and the
//! detail batcher: credential injection, exponential backoff on quota and
//! transient server signals, and a cooperative throttle for driving loops.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tokio::time::sleep;
use tracing::warn;

use crate::config::ApiKey;
use crate::error::{Result, ScoutError};

const BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Status codes treated as quota, rate-limit or transient server signals
const RETRYABLE_STATUSES: [u16; 4] = [403, 429, 500, 503];

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root that endpoint names are appended to
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Attempt budget per fetch (default: 5)
    pub max_retries: u32,
    /// Exponential backoff base (default: 1.6)
    pub backoff_base: f64,
    /// Length of one backoff step (default: 1s)
    pub backoff_unit: Duration,
    /// Pause between successive pages or batches (default: 100ms)
    pub request_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: 30,
            max_retries: 5,
            backoff_base: 1.6,
            backoff_unit: Duration::from_secs(1),
            request_delay: Duration::from_millis(100),
        }
    }
}

impl ClientConfig {
    /// Delay slept after failed attempt `attempt` (0-based)
    ///
    /// `floor(backoff_base ^ attempt) + 1` units.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let steps = self.backoff_base.powi(exponent).floor();
        let steps = if steps.is_finite() && steps >= 0.0 {
            steps as u32
        } else {
            u32::MAX - 1
        };
        self.backoff_unit.saturating_mul(steps.saturating_add(1))
    }
}

/// Fixed pause between the iterations of a driving loop
///
/// The first call returns immediately; every later call sleeps for the
/// configured delay. Purely cooperative, it does not track quota.
pub struct Throttle {
    delay: Duration,
    primed: bool,
}

impl Throttle {
    /// Create a throttle that pauses `delay` between iterations
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            primed: false,
        }
    }

    /// Wait before the next request of the loop
    pub async fn wait(&mut self) {
        if self.primed && !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.primed = true;
    }

    /// Get the pause applied between iterations
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// HTTP client wrapper with credential injection and retry logic
///
/// Requests are issued strictly one at a time. A fetch:
/// - returns the parsed JSON body on success
/// - backs off and retries on 403/429/500/503 and on network or decode errors
/// - fails immediately on any other status
/// - fails with `RetriesExhausted` once the attempt budget is spent
pub struct ApiClient {
    client: reqwest::Client,
    api_key: ApiKey,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(api_key: ApiKey) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(api_key: ApiKey, config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ScoutError::Http)?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// Fetch JSON from an API endpoint
    ///
    /// # Arguments
    /// * `endpoint` - Endpoint name under the API root (e.g., "search")
    /// * `params` - Query parameters; the credential is added automatically
    ///
    /// # Errors
    /// - `UnexpectedStatus` - Status outside the success and retryable sets
    /// - `RetriesExhausted` - Every attempt failed with a retryable error
    pub async fn fetch(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        self.fetch_with_retry(&url, params).await
    }

    /// Internal method to fetch with retry logic
    async fn fetch_with_retry(&self, url: &str, params: &[(&str, String)]) -> Result<Value> {
        let attempts = self.config.max_retries;

        for attempt in 0..attempts {
            match self.do_fetch(url, params).await {
                Ok(body) => return Ok(body),
                Err(e) if Self::is_retryable(&e) => {
                    let last = attempt + 1 == attempts;
                    if last {
                        warn!(attempt = attempt + 1, "{e}. Giving up");
                    } else {
                        let delay = self.config.backoff_delay(attempt);
                        warn!(
                            attempt = attempt + 1,
                            "{e}. Retrying in {}s...",
                            delay.as_secs_f64()
                        );
                        sleep(delay).await;
                    }
                }
                Err(e) => {
                    warn!("{e}. Not retrying");
                    return Err(e);
                }
            }
        }

        Err(ScoutError::RetriesExhausted { attempts })
    }

    /// Perform a single fetch attempt
    async fn do_fetch(&self, url: &str, params: &[(&str, String)]) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("key", self.api_key.expose())])
            .send()
            .await
            .map_err(|e| ScoutError::Http(e.without_url()))?;

        let status = response.status();

        if status == StatusCode::OK {
            return response
                .json::<Value>()
                .await
                .map_err(|e| ScoutError::Http(e.without_url()));
        }

        if RETRYABLE_STATUSES.contains(&status.as_u16()) {
            return Err(ScoutError::Throttled(status.as_u16()));
        }

        Err(ScoutError::UnexpectedStatus {
            status: status.as_u16(),
        })
    }

    /// Check if an error is retryable
    fn is_retryable(error: &ScoutError) -> bool {
        matches!(error, ScoutError::Throttled(_) | ScoutError::Http(_))
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a throttle for a driving loop using the configured delay
    pub fn throttle(&self) -> Throttle {
        Throttle::new(self.config.request_delay)
    }
}
