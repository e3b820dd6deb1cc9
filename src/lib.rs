//! Dwolla MassPay API client.
//!
//! A thin, typed client for the MassPay endpoints: batch disbursement job
//! creation and status/item retrieval. The crate's job is request shaping —
//! validate required arguments, merge layered optional parameters over the
//! configured default credentials, and delegate one HTTP call per operation
//! to the REST transport. Retry policy, job polling, and pagination are
//! deliberately left to callers.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  MassPay client  │  argument checks + parameter merging
//! └────────┬─────────┘
//!          │ one call per operation
//! ┌────────▼─────────┐
//! │  Rest transport  │  URL construction, HTTP dispatch,
//! │  (HttpTransport) │  response-format negotiation
//! └────────┬─────────┘
//!          │ HTTPS
//! ┌────────▼─────────┐
//! │   MassPay API    │  POST /masspay, GET /masspay/{id}, ...
//! └──────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dwolla_masspay::{ClientConfig, MassPay, RequestOptions};
//! use serde_json::json;
//!
//! # async fn example() -> dwolla_masspay::Result<()> {
//! let config = ClientConfig::sandbox("my-oauth-token", "1234");
//! let client = MassPay::new(&config)?;
//!
//! // Create a disbursement job from the account balance.
//! let items = vec![json!({"amount": 5.00, "destination": "812-111-1111"})];
//! let job = client.create_job("Balance", &items, &RequestOptions::new()).await?;
//!
//! // Check on it later.
//! let id = job["Id"].as_str().unwrap_or_default();
//! let status = client.get_job(id, &RequestOptions::new()).await?;
//! println!("job status: {status}");
//! # Ok(())
//! # }
//! ```
//!
//! # Per-call options
//!
//! Every operation accepts a [`RequestOptions`] with enumerated recognized
//! fields: per-call credential overrides, individually named optional API
//! parameters, a bulk replacement map, and the response-format selector.
//! The bulk map fully replaces the individually named parameters — the two
//! never merge. See [`RequestOptions`] for the precedence rules.
//!
//! # Module Organization
//!
//! - [`masspay`]: the [`MassPay`] client and [`RequestOptions`]
//! - [`transport`]: the sealed [`Rest`](transport::Rest) trait and
//!   [`HttpTransport`](transport::HttpTransport)
//! - [`config`]: [`ClientConfig`] and HTTP tuning
//! - [`error`]: error types
//!
//! # Error Handling
//!
//! All operations return [`Result<T, MassPayError>`](Result). Missing
//! required arguments fail locally before any network interaction; network
//! and API failures surface exactly as the transport produced them:
//!
//! ```rust,no_run
//! use dwolla_masspay::{ClientConfig, MassPay, MassPayError, RequestOptions};
//!
//! # async fn example() {
//! let client = MassPay::new(&ClientConfig::sandbox("token", "1234")).unwrap();
//!
//! match client.get_job("job-123", &RequestOptions::new()).await {
//!     Ok(job) => println!("status: {}", job["Status"]),
//!     Err(MassPayError::MissingArgument { operation, parameter }) => {
//!         eprintln!("bad call: {operation} needs {parameter}");
//!     }
//!     Err(MassPayError::ApiError(message)) => {
//!         eprintln!("server rejected the request: {message}");
//!     }
//!     Err(e) => eprintln!("transport failure: {e}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![allow(
    clippy::multiple_crate_versions,
    reason = "transitive dependencies from reqwest"
)]

pub mod config;
pub mod error;
pub mod masspay;
pub mod transport;

pub use config::{ClientConfig, HttpConfig};
pub use error::{MassPayError, Result};
pub use masspay::{MassPay, RequestOptions};
pub use transport::ResponseFormat;
