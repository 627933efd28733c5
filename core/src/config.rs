//! Client configuration.
//!
//! The only recognized option is the base address under which all journal
//! endpoints are resolved. [`Config::from_env`] keeps the deployment
//! convention: `JOURNAL_API_URL` when set, the local development server
//! otherwise.

use std::env;

/// Base address used when no other is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable consulted by [`Config::from_env`].
pub const BASE_URL_ENV: &str = "JOURNAL_API_URL";

/// Configuration for [`JournalClient`](crate::JournalClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root URL under which all journal endpoints are resolved.
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Resolve the base address from the environment, falling back to
    /// [`DEFAULT_BASE_URL`] when the variable is unset or empty.
    pub fn from_env() -> Self {
        match env::var(BASE_URL_ENV) {
            Ok(value) if !value.is_empty() => Self { base_url: value },
            _ => Self::default(),
        }
    }
}
