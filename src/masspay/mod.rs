//! MassPay operations: batch disbursement job creation and retrieval.
//!
//! This module provides the [`MassPay`] client, a request-shaping layer
//! over the five MassPay endpoints. Each operation validates its required
//! arguments, builds a payload from the configured credentials and the
//! per-call [`RequestOptions`], and delegates exactly one call to the
//! [`Rest`] transport. There is no retry, caching, polling, or pagination
//! logic here; transport errors propagate to the caller unchanged.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dwolla_masspay::{ClientConfig, MassPay, RequestOptions};
//! use serde_json::json;
//!
//! # async fn example() -> dwolla_masspay::Result<()> {
//! let config = ClientConfig::sandbox("my-token", "1234");
//! let client = MassPay::new(&config)?;
//!
//! let items = vec![
//!     json!({"amount": 5.00, "destination": "812-111-1111"}),
//!     json!({"amount": 10.50, "destination": "812-222-2222"}),
//! ];
//!
//! let job = client.create_job("Balance", &items, &RequestOptions::new()).await?;
//! println!("created job: {job}");
//! # Ok(())
//! # }
//! ```

use serde_json::Value;
use tracing::{info, instrument};

use crate::{
    config::ClientConfig,
    error::{MassPayError, Result},
    transport::{HttpTransport, Params, Rest},
};

mod options;

pub use options::RequestOptions;

/// Rejects an empty required argument before any payload is built.
fn require(operation: &'static str, parameter: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(MassPayError::MissingArgument { operation, parameter });
    }
    Ok(())
}

/// MassPay API client.
///
/// Holds the default credentials and the transport. Each call builds an
/// independent payload, so a single client is safe to share across tasks.
///
/// Construct from a [`ClientConfig`] for the standard HTTP transport, or
/// via [`MassPay::with_transport`] to supply a transport with custom
/// settings.
#[derive(Debug)]
pub struct MassPay<T: Rest = HttpTransport> {
    transport: T,
    access_token: String,
    pin: String,
}

impl MassPay<HttpTransport> {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configured base URL is malformed or HTTP
    /// client creation fails.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::with_config(&config.base_url, &config.http)?;
        Ok(Self::with_transport(transport, &config.access_token, &config.pin))
    }
}

impl<T: Rest> MassPay<T> {
    /// Creates a client over an existing transport.
    pub fn with_transport(
        transport: T,
        access_token: impl Into<String>,
        pin: impl Into<String>,
    ) -> Self {
        Self { transport, access_token: access_token.into(), pin: pin.into() }
    }

    /// Creates a MassPay job.
    ///
    /// The payload carries the credentials (overridable via
    /// [`RequestOptions::alternate_token`] and
    /// [`RequestOptions::alternate_pin`]), the funding source, the items
    /// passed through verbatim, and the merged optional parameters.
    ///
    /// Issues `POST /masspay`.
    ///
    /// # Errors
    ///
    /// Returns [`MassPayError::MissingArgument`] if `funds_source` or
    /// `items` is empty; otherwise whatever the transport produces.
    #[instrument(skip(self, items, options))]
    pub async fn create_job(
        &self,
        funds_source: &str,
        items: &[Value],
        options: &RequestOptions,
    ) -> Result<Value> {
        require("create_job", "funds_source", funds_source)?;
        if items.is_empty() {
            return Err(MassPayError::MissingArgument {
                operation: "create_job",
                parameter: "items",
            });
        }

        let mut base = Params::new();
        base.insert("oauth_token".to_owned(), self.token(options).into());
        base.insert("pin".to_owned(), options.pin_or(&self.pin).into());
        base.insert("fundsSource".to_owned(), funds_source.into());
        base.insert("items".to_owned(), Value::Array(items.to_vec()));

        let (payload, format) = options.merge_into(base);

        info!(item_count = items.len(), "creating masspay job");
        self.transport.post("/masspay", &payload, format).await
    }

    /// Checks the status of an existing MassPay job.
    ///
    /// Sends credentials only; individual and bulk optional parameters are
    /// not part of this endpoint's contract (the response-format override
    /// still applies).
    ///
    /// Issues `GET /masspay/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`MassPayError::MissingArgument`] if `id` is empty.
    #[instrument(skip(self, options))]
    pub async fn get_job(&self, id: &str, options: &RequestOptions) -> Result<Value> {
        require("get_job", "id", id)?;

        let query = self.credentials_query(options);
        self.transport
            .get(&format!("/masspay/{id}"), &query, options.format_override())
            .await
    }

    /// Retrieves all items for a created MassPay job.
    ///
    /// Applies the same merge policy as [`create_job`](Self::create_job).
    ///
    /// Issues `GET /masspay/{id}/items`.
    ///
    /// # Errors
    ///
    /// Returns [`MassPayError::MissingArgument`] if `id` is empty.
    #[instrument(skip(self, options))]
    pub async fn get_job_items(&self, id: &str, options: &RequestOptions) -> Result<Value> {
        require("get_job_items", "id", id)?;

        let mut base = Params::new();
        base.insert("oauth_token".to_owned(), self.token(options).into());

        let (query, format) = options.merge_into(base);
        self.transport.get(&format!("/masspay/{id}/items"), &query, format).await
    }

    /// Retrieves a single item from a created MassPay job.
    ///
    /// Sends credentials only.
    ///
    /// Issues `GET /masspay/{jobId}/items/{itemId}`.
    ///
    /// # Errors
    ///
    /// Returns [`MassPayError::MissingArgument`] if `job_id` or `item_id`
    /// is empty.
    #[instrument(skip(self, options))]
    pub async fn get_item(
        &self,
        job_id: &str,
        item_id: &str,
        options: &RequestOptions,
    ) -> Result<Value> {
        require("get_item", "job_id", job_id)?;
        require("get_item", "item_id", item_id)?;

        let query = self.credentials_query(options);
        self.transport
            .get(&format!("/masspay/{job_id}/items/{item_id}"), &query, options.format_override())
            .await
    }

    /// Lists all MassPay jobs under the effective OAuth token.
    ///
    /// Applies the same merge policy as [`create_job`](Self::create_job).
    ///
    /// Issues `GET /masspay`.
    ///
    /// # Errors
    ///
    /// Returns whatever the transport produces; there are no required
    /// arguments.
    #[instrument(skip(self, options))]
    pub async fn list_jobs(&self, options: &RequestOptions) -> Result<Value> {
        let mut base = Params::new();
        base.insert("oauth_token".to_owned(), self.token(options).into());

        let (query, format) = options.merge_into(base);
        self.transport.get("/masspay", &query, format).await
    }

    fn token<'a>(&'a self, options: &'a RequestOptions) -> &'a str {
        options.token_or(&self.access_token)
    }

    fn credentials_query(&self, options: &RequestOptions) -> Params {
        let mut query = Params::new();
        query.insert("oauth_token".to_owned(), self.token(options).into());
        query
    }
}
