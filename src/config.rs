//! Client configuration
//!
//! A [`ClientConfig`] can be built in code, loaded from YAML, or taken from
//! the environment (`TFE_ADDRESS`, `TFE_HOSTNAME`, `TFE_TOKEN`). Values set
//! explicitly always win over the environment.
//!
//! ```yaml
//! address: https://tfe.example.com
//! token: xxxxxx.atlasv1.yyyyyy
//! retry_server_errors: true
//! headers:
//!   X-Request-Source: ci
//! ```

use crate::auth::Token;
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::types::{BackoffType, OptionStringExt, StringMap};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Address used when none is configured
pub const DEFAULT_ADDRESS: &str = "https://app.terraform.io";

/// API path prefix appended to the address
pub const DEFAULT_BASE_PATH: &str = "/api/v2/";

/// Environment variable holding the full address
pub const ENV_ADDRESS: &str = "TFE_ADDRESS";

/// Environment variable holding a bare hostname (HTTPS is assumed)
pub const ENV_HOSTNAME: &str = "TFE_HOSTNAME";

/// Environment variable holding the API token
pub const ENV_TOKEN: &str = "TFE_TOKEN";

/// Configuration for a [`crate::Client`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme and host of the API server
    pub address: String,

    /// Path prefix of the API on that server
    pub base_path: String,

    /// API token
    pub token: Option<Token>,

    /// Extra headers sent with every request
    pub headers: StringMap,

    /// Retry 5xx responses and connection failures (429 is always retried)
    pub retry_server_errors: bool,

    /// Maximum number of retries per request
    pub max_retries: u32,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Backoff strategy between retries
    pub backoff_type: BackoffType,

    /// First retry delay in milliseconds
    pub initial_backoff_ms: u64,

    /// Upper bound for retry delays in milliseconds
    pub max_backoff_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let http = HttpClientConfig::default();
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            token: None,
            headers: StringMap::new(),
            retry_server_errors: http.retry_server_errors,
            max_retries: http.max_retries,
            timeout_secs: http.timeout.as_secs(),
            backoff_type: http.backoff_type,
            initial_backoff_ms: http.initial_backoff.as_millis() as u64,
            max_backoff_ms: http.max_backoff.as_millis() as u64,
        }
    }
}

impl ClientConfig {
    /// Create a config for the default address with the given token
    pub fn new(token: impl Into<Token>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Build a config from the process environment
    pub fn from_env() -> Self {
        Self::default().fill_from_env_with(|key| std::env::var(key).ok())
    }

    /// Parse a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Fill unset values from the process environment
    #[must_use]
    pub fn fill_from_env(self) -> Self {
        self.fill_from_env_with(|key| std::env::var(key).ok())
    }

    /// Fill unset values using `lookup` as the environment.
    ///
    /// The address is only taken from the environment while it still holds
    /// the default; the token only while none is configured.
    #[must_use]
    pub fn fill_from_env_with<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.address == DEFAULT_ADDRESS {
            if let Some(address) = lookup(ENV_ADDRESS).none_if_empty() {
                self.address = address;
            } else if let Some(host) = lookup(ENV_HOSTNAME).none_if_empty() {
                self.address = format!("https://{host}");
            }
        }

        if self.token.as_ref().map_or(true, Token::is_empty) {
            if let Some(token) = lookup(ENV_TOKEN).none_if_empty() {
                self.token = Some(Token::new(token));
            }
        }

        self
    }

    /// Set the address
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<Token>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Add a header sent with every request
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Retry server errors and connection failures
    #[must_use]
    pub fn with_retry_server_errors(mut self, retry: bool) -> Self {
        self.retry_server_errors = retry;
        self
    }

    /// Set the retry budget and backoff bounds
    #[must_use]
    pub fn with_retries(mut self, max_retries: u32, initial: Duration, max: Duration) -> Self {
        self.max_retries = max_retries;
        self.initial_backoff_ms = initial.as_millis() as u64;
        self.max_backoff_ms = max.as_millis() as u64;
        self
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        if self.token.as_ref().map_or(true, Token::is_empty) {
            return Err(Error::missing_field("token"));
        }
        self.base_url()?;
        if self.max_backoff_ms < self.initial_backoff_ms {
            return Err(Error::invalid_value(
                "max_backoff_ms",
                "must not be smaller than initial_backoff_ms",
            ));
        }
        Ok(())
    }

    /// The address joined with the base path, always ending in `/`
    pub fn base_url(&self) -> Result<Url> {
        let address = Url::parse(&self.address)
            .map_err(|e| Error::invalid_value("address", e.to_string()))?;
        if !matches!(address.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "address",
                format!("unsupported scheme '{}'", address.scheme()),
            ));
        }

        let mut base_path = self.base_path.trim_matches('/').to_string();
        if !base_path.is_empty() {
            base_path.push('/');
        }
        Ok(address.join(&format!("/{base_path}"))?)
    }

    /// Translate into the transport configuration
    pub fn http_config(&self) -> Result<HttpClientConfig> {
        self.validate()?;

        let mut builder = HttpClientConfig::builder()
            .base_url(self.base_url()?.as_str())
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_retries(self.max_retries)
            .backoff(
                self.backoff_type,
                Duration::from_millis(self.initial_backoff_ms),
                Duration::from_millis(self.max_backoff_ms),
            )
            .retry_server_errors(self.retry_server_errors)
            .no_rate_limit();

        if let Some(token) = &self.token {
            builder = builder.token(token.clone());
        }
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }

        Ok(builder.build())
    }
}
