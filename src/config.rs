//! Environment-driven configuration for the storefront client.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{debug, warn};

/// Connection settings for the storefront gateway.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API gateway, without a trailing slash.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Config {
    /// Loads configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `API_URL`, `HTTP_TIMEOUT_SECS`.
    pub fn load() -> Self {
        Self {
            api_url: load_or("API_URL", "http://localhost:9000".to_string()),
            timeout_secs: load_or("HTTP_TIMEOUT_SECS", 30),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load()
    }
}

fn load_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
{
    match env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Invalid {key} value {raw:?}, using default: {default}");
                default
            }
        },
        Err(_) => {
            debug!("{key} not set, using default: {default}");
            default
        }
    }
}
