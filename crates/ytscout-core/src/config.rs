//! Credential loading
//!
//! The API key is read once from the process environment at startup.

use std::fmt;

use crate::error::{Result, ScoutError};

/// Environment variable holding the YouTube Data API key
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// YouTube Data API key
///
/// `Debug` output is redacted so the key never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap an API key value
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from `YOUTUBE_API_KEY`
    ///
    /// # Errors
    /// Returns `MissingCredential` if the variable is unset or blank
    pub fn from_env() -> Result<Self> {
        Self::from_var(std::env::var(API_KEY_ENV).ok())
    }

    fn from_var(value: Option<String>) -> Result<Self> {
        match value {
            Some(key) if !key.trim().is_empty() => Ok(Self(key.trim().to_string())),
            _ => Err(ScoutError::MissingCredential(API_KEY_ENV.to_string())),
        }
    }

    /// The raw key, for request construction only
    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
