//! HTTP transport implementation.
//!
//! This module provides the reqwest-based [`Rest`] implementation used by
//! the MassPay client in production.

use std::{sync::LazyLock, time::Duration};

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use super::{Params, ResponseFormat, Rest, parse_response, sealed};
use crate::{
    config::HttpConfig,
    error::{MassPayError, Result},
};

/// Default HTTP client with connection pooling enabled.
///
/// Using a singleton avoids recreating the client per transport instance,
/// preserving connection pooling benefits across all default transports.
static DEFAULT_HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .pool_max_idle_per_host(10)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("failed to create default HTTP client")
});

/// Renders a JSON value as a query-string value.
///
/// Strings are used as-is; everything else is rendered in its JSON form, so
/// numbers and booleans come out unquoted.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// HTTP transport using reqwest.
///
/// Owns URL construction against a fixed API root, query-string encoding,
/// JSON bodies, and response-format negotiation. Connection pooling and
/// keep-alive come from the underlying client.
///
/// # Examples
///
/// ```rust,no_run
/// use dwolla_masspay::transport::{HttpTransport, Params, ResponseFormat, Rest};
///
/// # async fn example() -> dwolla_masspay::Result<()> {
/// let transport = HttpTransport::new("https://www.dwolla.com/oauth/rest")?;
///
/// let mut query = Params::new();
/// query.insert("oauth_token".to_owned(), "token".into());
///
/// let response = transport.get("/masspay/job-1", &query, ResponseFormat::Dwolla).await?;
/// println!("{response}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl sealed::private::Sealed for HttpTransport {}

impl HttpTransport {
    /// Creates a transport against the given API root.
    ///
    /// Uses a shared singleton client for connection pooling efficiency.
    ///
    /// # Errors
    ///
    /// Returns [`MassPayError::TransportError`] if `base_url` is not a
    /// well-formed absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::validate_base_url(base_url)?;
        Ok(Self {
            client: DEFAULT_HTTP_CLIENT.clone(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Creates a transport with custom HTTP configuration.
    ///
    /// # Errors
    ///
    /// Returns error if `base_url` is malformed or HTTP client creation
    /// fails.
    pub fn with_config(base_url: &str, config: &HttpConfig) -> Result<Self> {
        Self::validate_base_url(base_url)?;

        let client = Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(MassPayError::HttpError)?;

        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    fn validate_base_url(base_url: &str) -> Result<()> {
        let url = Url::parse(base_url)
            .map_err(|e| MassPayError::TransportError(format!("invalid base_url: {e}")))?;
        if url.host_str().is_none() {
            return Err(MassPayError::TransportError(format!("base_url missing host: {base_url}")));
        }
        Ok(())
    }

    /// Builds the full request URL for `path`, appending `query` as
    /// percent-encoded query parameters.
    fn build_url(&self, path: &str, query: &Params) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|e| MassPayError::TransportError(format!("invalid path '{path}': {e}")))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, &query_value(value));
            }
        }

        Ok(url)
    }

    #[instrument(skip(self, params, format))]
    async fn execute_request(
        &self,
        method: &str,
        path: &str,
        params: &Params,
        format: ResponseFormat,
    ) -> Result<Value> {
        let request = if method == "POST" {
            let url = self.build_url(path, &Params::new())?;
            self.client.post(url).json(params)
        } else {
            let url = self.build_url(path, params)?;
            self.client.get(url)
        };

        debug!(method, format = format.as_key(), "dispatching request");

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MassPayError::ApiError(format!("server returned status {status}")));
        }

        let body = response.text().await.map_err(MassPayError::HttpError)?;

        parse_response(&body, format)
    }
}

impl Rest for HttpTransport {
    async fn get<'a>(
        &'a self,
        path: &'a str,
        query: &'a Params,
        format: ResponseFormat,
    ) -> Result<Value> {
        self.execute_request("GET", path, query, format).await
    }

    async fn post<'a>(
        &'a self,
        path: &'a str,
        body: &'a Params,
        format: ResponseFormat,
    ) -> Result<Value> {
        self.execute_request("POST", path, body, format).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn transport() -> HttpTransport {
        HttpTransport::new("https://uat.dwolla.com/oauth/rest").unwrap()
    }

    #[test]
    fn test_new_valid_base_url() {
        assert!(HttpTransport::new("https://www.dwolla.com/oauth/rest").is_ok());
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let transport = HttpTransport::new("https://uat.dwolla.com/oauth/rest/").unwrap();
        let url = transport.build_url("/masspay", &Params::new()).unwrap();
        assert_eq!(url.as_str(), "https://uat.dwolla.com/oauth/rest/masspay");
    }

    #[test]
    fn test_new_invalid_base_url() {
        let result = HttpTransport::new("not-a-url");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), MassPayError::TransportError(_)));
    }

    #[test]
    fn test_with_config() {
        let config = HttpConfig {
            pool_max_idle_per_host: 2,
            timeout_secs: 5,
            connect_timeout_secs: 2,
        };
        assert!(HttpTransport::with_config("https://uat.dwolla.com/oauth/rest", &config).is_ok());
    }

    #[test]
    fn test_build_url_without_query() {
        let url = transport().build_url("/masspay/job-1/items", &Params::new()).unwrap();
        assert_eq!(url.as_str(), "https://uat.dwolla.com/oauth/rest/masspay/job-1/items");
    }

    #[test]
    fn test_build_url_with_query() {
        let mut query = Params::new();
        query.insert("oauth_token".to_owned(), "TOK".into());
        query.insert("limit".to_owned(), json!(25));

        let url = transport().build_url("/masspay", &query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://uat.dwolla.com/oauth/rest/masspay?oauth_token=TOK&limit=25"
        );
    }

    #[test]
    fn test_build_url_percent_encodes_values() {
        let mut query = Params::new();
        query.insert("oauth_token".to_owned(), "token with spaces&more".into());

        let url = transport().build_url("/masspay", &query).unwrap();
        assert!(url.as_str().contains("token+with+spaces%26more"));
    }

    #[test]
    fn test_query_value_string_unquoted() {
        assert_eq!(query_value(&json!("abc")), "abc");
    }

    #[test]
    fn test_query_value_scalars() {
        assert_eq!(query_value(&json!(5)), "5");
        assert_eq!(query_value(&json!(2.5)), "2.5");
        assert_eq!(query_value(&json!(true)), "true");
    }

    #[test]
    fn test_transport_debug_format() {
        let debug_str = format!("{:?}", transport());
        assert!(debug_str.contains("HttpTransport"));
    }
}
