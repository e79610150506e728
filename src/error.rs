//! Error types for the ranki crate.
//!
//! Every fallible operation returns [`Result`]. There are two failure
//! kinds that matter in practice: the HTTP round trip itself failed
//! ([`Error::Http`] / [`Error::ConnectionRefused`]), or AnkiConnect
//! answered with a non-null `error` field ([`Error::AnkiConnect`]).
//!
//! ```no_run
//! use ranki::{AnkiClient, Error};
//!
//! # async fn example() {
//! let client = AnkiClient::new();
//!
//! match client.misc().version().await {
//!     Ok(v) => println!("AnkiConnect v{v}"),
//!     Err(Error::ConnectionRefused) => {
//!         eprintln!("start Anki with the AnkiConnect add-on first");
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```

use thiserror::Error;

/// The error type for AnkiConnect operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP round trip failed for a reason other than a refused
    /// connection (timeout, malformed URL, TLS, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// AnkiConnect answered with a non-null `error` field.
    ///
    /// The message is passed through verbatim, e.g.
    /// `"deck was not found"` or
    /// `"cannot create note because it is a duplicate"`.
    #[error("AnkiConnect error: {0}")]
    AnkiConnect(String),

    /// The response carried neither a result nor an error.
    ///
    /// Only expected for actions documented to return `null`; anywhere
    /// else it points at an AnkiConnect bug.
    #[error("AnkiConnect returned an empty response")]
    EmptyResponse,

    /// A result did not decode into the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Nothing is listening on the configured endpoint.
    ///
    /// Anki is not running, the add-on is missing, or AnkiConnect is
    /// bound to a different port.
    #[error("could not connect to Anki; is it running with AnkiConnect installed?")]
    ConnectionRefused,

    /// AnkiConnect refused the request.
    ///
    /// An API key is required and missing or wrong, or the request
    /// needs to be approved in the Anki UI first.
    #[error("permission denied; request permission first or check the API key")]
    PermissionDenied,

    /// Batch bookkeeping failed.
    ///
    /// Raised when the combined `multi` dispatch could not complete
    /// (every handle in the group carries the same message), when the
    /// server returned a different number of sub-results than
    /// sub-actions sent, or when a result slot was already consumed.
    #[error("batch error: {0}")]
    Batch(String),
}

/// A specialized Result type for AnkiConnect operations.
pub type Result<T> = std::result::Result<T, Error>;
