//! Error types for the Dwolla MassPay client.
//!
//! All errors implement the standard [`std::error::Error`] trait via
//! [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Argument errors** ([`MassPayError::MissingArgument`]): a required
//!   parameter was empty or absent; raised locally before any network call
//! - **Network errors** ([`MassPayError::HttpError`]): HTTP communication
//!   failures, propagated from the transport unchanged
//! - **API errors** ([`MassPayError::ApiError`]): the Dwolla API reported a
//!   failure in its response envelope
//! - **Response errors** ([`MassPayError::InvalidResponse`]): the response
//!   body could not be parsed in the negotiated format
//!
//! # Examples
//!
//! ```
//! use dwolla_masspay::{MassPayError, Result};
//!
//! fn require_id(id: &str) -> Result<&str> {
//!     if id.is_empty() {
//!         return Err(MassPayError::MissingArgument {
//!             operation: "get_job",
//!             parameter: "id",
//!         });
//!     }
//!     Ok(id)
//! }
//! ```

use thiserror::Error;

/// Result type alias for MassPay operations.
///
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, MassPayError>;

/// Errors that can occur in the MassPay client.
///
/// Argument errors are produced locally and synchronously, before any
/// network interaction. Everything else originates at the transport or the
/// remote API and is surfaced without wrapping, retrying, or
/// reinterpretation.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum MassPayError {
    /// A required argument was empty or absent.
    ///
    /// This error is raised before the request payload is built, so the
    /// transport is never invoked. The message names both the operation and
    /// the offending parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use dwolla_masspay::MassPayError;
    ///
    /// let err = MassPayError::MissingArgument { operation: "create_job", parameter: "items" };
    /// assert_eq!(err.to_string(), "create_job() requires items parameter");
    /// ```
    #[error("{operation}() requires {parameter} parameter")]
    MissingArgument {
        /// The operation that rejected the call.
        operation: &'static str,
        /// The parameter that was empty or absent.
        parameter: &'static str,
    },

    /// HTTP request failed.
    ///
    /// Wraps [`reqwest::Error`]: timeouts, connection refusals, DNS and TLS
    /// failures. The client does not retry; callers own any backoff policy.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The Dwolla API reported a failure.
    ///
    /// Produced when the response envelope carries `Success: false`, or when
    /// the server returns a non-success HTTP status. The server's own message
    /// is carried verbatim.
    #[error("Dwolla API error: {0}")]
    ApiError(String),

    /// The response body could not be parsed in the negotiated format.
    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    /// Request construction failed before dispatch.
    ///
    /// Covers malformed base URLs and paths that cannot be joined onto them.
    #[error("transport error: {0}")]
    TransportError(String),

    /// Configuration validation failed.
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}
