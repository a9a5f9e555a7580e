//! Client configuration

use crate::{ClientError, ClientResult, NetworkHttpClient};

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Request timeout used when none is configured (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_BASE_URL: &str = "DISH_API_BASE_URL";
const ENV_TOKEN: &str = "DISH_API_TOKEN";
const ENV_TIMEOUT: &str = "DISH_API_TIMEOUT";

/// Client configuration for connecting to the dish management backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read the configuration from the process environment
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `DISH_API_BASE_URL` | `http://localhost:8080` |
    /// | `DISH_API_TOKEN` | none |
    /// | `DISH_API_TIMEOUT` | `30` |
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut config = Self::new(base_url);

        if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.is_empty()) {
            config.token = Some(token);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT) {
            config.timeout = raw.trim().parse().map_err(|_| {
                ClientError::Config(format!("{ENV_TIMEOUT} must be a number of seconds, got {raw:?}"))
            })?;
        }

        Ok(config)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
