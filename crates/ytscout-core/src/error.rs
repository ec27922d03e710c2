//! Error types for ytscout
//!
//! One error enum covers the retryable per-attempt failures, the terminal
//! fetch outcomes and the startup/input problems surfaced at the boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all ytscout operations
#[derive(Error, Debug)]
pub enum ScoutError {
    /// Network, timeout or body-decode failure on a single attempt
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Quota, rate-limit or transient server status on a single attempt
    #[error("Throttled by upstream (HTTP {0})")]
    Throttled(u16),

    /// Status outside the success and retryable sets
    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    /// Attempt budget spent without a successful response
    #[error("Failed after {attempts} retries")]
    RetriesExhausted { attempts: u32 },

    /// API credential absent from the environment
    #[error("Missing credential: set env var {0}")]
    MissingCredential(String),

    /// Identifier source file does not exist
    #[error("Input file not found at {}", .0.display())]
    MissingInput(PathBuf),

    /// Search query failed validation
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// Start date not in YYYY-MM-DD form
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Reading or writing an artifact failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ytscout operations
pub type Result<T> = std::result::Result<T, ScoutError>;
