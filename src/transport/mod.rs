//! REST transport abstraction.
//!
//! This module provides a sealed [`Rest`] trait that abstracts the single
//! HTTP round-trip every MassPay operation delegates to, plus the
//! [`ResponseFormat`] negotiation the Dwolla API uses (`dwollaparse`).
//!
//! # Architecture
//!
//! The transport layer separates protocol mechanics from request shaping:
//! - **`Rest`**: HTTP method dispatch, URL construction, response-format
//!   negotiation
//! - **[`MassPay`](crate::masspay::MassPay)**: payload building and
//!   parameter merging
//!
//! # Examples
//!
//! ```rust,no_run
//! use dwolla_masspay::transport::{HttpTransport, Params, ResponseFormat, Rest};
//!
//! # async fn example() -> dwolla_masspay::Result<()> {
//! let transport = HttpTransport::new("https://uat.dwolla.com/oauth/rest")?;
//!
//! let mut query = Params::new();
//! query.insert("oauth_token".to_owned(), "my-token".into());
//!
//! let jobs = transport.get("/masspay", &query, ResponseFormat::Dwolla).await?;
//! println!("jobs: {jobs}");
//! # Ok(())
//! # }
//! ```

#[allow(
    redundant_imports,
    reason = "Future needed for RPITIT despite being in Edition 2024 prelude"
)]
use std::future::Future;

use serde_json::Value;

use crate::error::{MassPayError, Result};

pub mod http;
pub(crate) mod sealed;

pub use http::HttpTransport;

/// Request parameter map.
///
/// Used both as the query map for GET requests and as the JSON body for
/// POST requests. The API does not depend on key ordering.
pub type Params = serde_json::Map<String, Value>;

/// Response format negotiated with the transport.
///
/// Mirrors the API's `dwollaparse` selector. The default, [`Dwolla`],
/// unwraps the standard `{Success, Message, Response}` envelope and
/// surfaces server-reported failures as
/// [`ApiError`](crate::MassPayError::ApiError).
///
/// [`Dwolla`]: ResponseFormat::Dwolla
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Unwrap the response envelope and return its `Response` field.
    #[default]
    Dwolla,
    /// Return the parsed JSON body without unwrapping.
    Json,
    /// Return the body text verbatim, as a JSON string value.
    Raw,
}

impl ResponseFormat {
    /// Parses a wire-level selector key (`"dwolla"`, `"json"`, `"raw"`).
    ///
    /// Unrecognized keys fall back to [`ResponseFormat::Dwolla`], matching
    /// the server-side default.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "json" => Self::Json,
            "raw" => Self::Raw,
            _ => Self::Dwolla,
        }
    }

    /// Returns the wire-level selector key for this format.
    #[must_use]
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Dwolla => "dwolla",
            Self::Json => "json",
            Self::Raw => "raw",
        }
    }
}

/// REST transport abstraction.
///
/// This trait is sealed: only implementations within this crate exist, so
/// every transport handling credential-bearing payloads is reviewed here.
///
/// Both operations perform exactly one HTTP round-trip. Errors are
/// propagated to the caller unchanged; the trait defines no retry or
/// caching semantics.
pub trait Rest: sealed::private::Sealed + Send + Sync {
    /// Executes a GET request with the given query parameters.
    ///
    /// # Errors
    ///
    /// Returns error if request construction, the HTTP round-trip, or
    /// response parsing fails.
    fn get<'a>(
        &'a self,
        path: &'a str,
        query: &'a Params,
        format: ResponseFormat,
    ) -> impl Future<Output = Result<Value>> + Send + 'a;

    /// Executes a POST request with the given JSON body.
    ///
    /// # Errors
    ///
    /// Returns error if request construction, the HTTP round-trip, or
    /// response parsing fails.
    fn post<'a>(
        &'a self,
        path: &'a str,
        body: &'a Params,
        format: ResponseFormat,
    ) -> impl Future<Output = Result<Value>> + Send + 'a;
}

/// Parses a response body according to the negotiated format.
///
/// # Errors
///
/// Returns [`MassPayError::InvalidResponse`] if the body is not valid JSON
/// (except in [`ResponseFormat::Raw`]), or if the envelope shape is missing
/// in [`ResponseFormat::Dwolla`]. Returns
/// [`MassPayError::ApiError`] when the envelope reports `Success: false`.
///
/// # Examples
///
/// ```
/// use dwolla_masspay::transport::{ResponseFormat, parse_response};
///
/// let body = r#"{"Success": true, "Message": "Success", "Response": {"Id": "abc"}}"#;
/// let value = parse_response(body, ResponseFormat::Dwolla)?;
/// assert_eq!(value["Id"], "abc");
/// # Ok::<(), dwolla_masspay::MassPayError>(())
/// ```
pub fn parse_response(body: &str, format: ResponseFormat) -> Result<Value> {
    if format == ResponseFormat::Raw {
        return Ok(Value::String(body.to_owned()));
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| MassPayError::InvalidResponse(format!("body is not valid JSON: {e}")))?;

    if format == ResponseFormat::Json {
        return Ok(value);
    }

    let Value::Object(mut envelope) = value else {
        return Err(MassPayError::InvalidResponse(
            "expected response envelope object".to_owned(),
        ));
    };

    let success = envelope
        .get("Success")
        .and_then(Value::as_bool)
        .ok_or_else(|| MassPayError::InvalidResponse("envelope missing Success flag".to_owned()))?;

    if !success {
        let message = envelope
            .get("Message")
            .and_then(Value::as_str)
            .unwrap_or("request failed")
            .to_owned();
        return Err(MassPayError::ApiError(message));
    }

    Ok(envelope.remove("Response").unwrap_or(Value::Null))
}
