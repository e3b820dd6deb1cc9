//! Client configuration types.
//!
//! This module defines TOML-deserializable configuration for the MassPay
//! client: default credentials, the API root, and HTTP transport tuning.
//!
//! Credentials are an explicit configuration object handed to the client at
//! construction time. There is no process-wide credential store; per-call
//! overrides are accepted through
//! [`RequestOptions`](crate::masspay::RequestOptions).

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{MassPayError, Result};

/// Production API root.
pub const PRODUCTION_API_ROOT: &str = "https://www.dwolla.com/oauth/rest";

/// Sandbox (UAT) API root.
pub const SANDBOX_API_ROOT: &str = "https://uat.dwolla.com/oauth/rest";

/// Client configuration.
///
/// Holds the default credentials applied to every request and the transport
/// settings. Deserializable from TOML:
///
/// ```toml
/// access_token = "my-oauth-token"
/// pin = "1234"
/// base_url = "https://uat.dwolla.com/oauth/rest"
///
/// [http]
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Default OAuth access token, applied to every request.
    pub access_token: String,

    /// Default account PIN, applied to job creation.
    pub pin: String,

    /// API root URL (default: production).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP transport configuration.
    #[serde(default)]
    pub http: HttpConfig,
}

impl ClientConfig {
    /// Creates a configuration pointing at the production API.
    pub fn production(access_token: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            pin: pin.into(),
            base_url: PRODUCTION_API_ROOT.to_owned(),
            http: HttpConfig::default(),
        }
    }

    /// Creates a configuration pointing at the sandbox (UAT) API.
    pub fn sandbox(access_token: impl Into<String>, pin: impl Into<String>) -> Self {
        Self { base_url: SANDBOX_API_ROOT.to_owned(), ..Self::production(access_token, pin) }
    }

    /// Parses a configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`MassPayError::ConfigError`] if the document is not valid
    /// TOML or required fields are missing.
    pub fn from_toml(document: &str) -> Result<Self> {
        toml::from_str(document).map_err(|e| MassPayError::ConfigError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// This method checks that:
    /// - the access token is not empty
    /// - the base URL parses and uses HTTPS (credentials travel in query
    ///   strings and request bodies, so plain HTTP is rejected)
    /// - the HTTP timeout bounds are sane
    ///
    /// Validation is caller-invoked: configurations pointing at local test
    /// servers stay constructible without it.
    ///
    /// # Errors
    ///
    /// Returns [`MassPayError::ConfigError`] if any check fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use dwolla_masspay::ClientConfig;
    ///
    /// let config = ClientConfig::sandbox("token", "1234");
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.access_token.is_empty() {
            return Err(MassPayError::ConfigError("access_token must not be empty".to_owned()));
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            MassPayError::ConfigError(format!("invalid base_url '{}': {e}", self.base_url))
        })?;

        if url.scheme() != "https" {
            return Err(MassPayError::ConfigError(format!(
                "base_url must use HTTPS, got: {}",
                url.scheme()
            )));
        }

        self.http.validate()
    }
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Maximum idle connections per host.
    #[serde(default = "default_pool_max_idle")]
    pub pool_max_idle_per_host: usize,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: default_pool_max_idle(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl HttpConfig {
    /// Validates configuration values are within acceptable bounds.
    ///
    /// # Errors
    ///
    /// Returns error if timeout values are outside valid ranges:
    /// - `timeout_secs`: must be 1-300 seconds
    /// - `connect_timeout_secs`: must be 1-60 seconds
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(MassPayError::ConfigError(
                "timeout_secs must be between 1 and 300".to_owned(),
            ));
        }
        if self.connect_timeout_secs == 0 || self.connect_timeout_secs > 60 {
            return Err(MassPayError::ConfigError(
                "connect_timeout_secs must be between 1 and 60".to_owned(),
            ));
        }
        Ok(())
    }

    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the connection timeout as a [`Duration`].
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn default_base_url() -> String {
    PRODUCTION_API_ROOT.to_owned()
}

fn default_pool_max_idle() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}
