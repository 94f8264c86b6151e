//! HTTP-specific error types for the clinic API SDK.
//!
//! The central type here is [`TransportFailure`]: the closed classification of
//! everything that can go wrong *before* the server produces a response. It is
//! constructed exactly once, at the boundary where the underlying I/O call is
//! awaited, and pattern-matched exhaustively when the operations layer builds
//! its result envelope.
//!
//! Completed responses — including 4xx and 5xx — are **not** errors at this
//! layer; [`crate::HttpClient::request`] returns them as `Ok(HttpResponse)`
//! and leaves interpretation to the caller.

use thiserror::Error;

/// Synthetic status code reported for timeout failures.
pub const TIMEOUT_STATUS: u16 = 408;

/// Synthetic status code reported for connectivity failures.
pub const NETWORK_STATUS: u16 = 0;

/// A failure that occurred before any HTTP response existed.
///
/// The variants form the SDK's transient-failure taxonomy:
///
/// - [`Timeout`](Self::Timeout) - the attempt exceeded its deadline and the
///   in-flight request was aborted. Retried.
/// - [`Network`](Self::Network) - the connection could not be established.
///   Retried.
/// - [`Other`](Self::Other) - anything else (e.g., the connection dropped
///   mid-body). Not retried; surfaced immediately.
///
/// # Example
///
/// ```rust
/// use aura_clinic_api::clients::TransportFailure;
///
/// let failure = TransportFailure::Timeout;
/// assert!(failure.is_transient());
/// assert_eq!(failure.status_code(), Some(408));
/// ```
#[derive(Debug, Error)]
pub enum TransportFailure {
    /// The attempt exceeded its deadline.
    #[error("Request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("Could not connect to the server")]
    Network(#[source] reqwest::Error),

    /// Any other pre-response failure.
    #[error("{0}")]
    Other(String),
}

impl TransportFailure {
    /// Classifies a transport-layer error from the underlying HTTP library.
    ///
    /// This is the single place where library error shapes are narrowed into
    /// the closed taxonomy; nothing downstream inspects `reqwest::Error`.
    #[must_use]
    pub fn classify(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Network(err)
        } else {
            Self::Other(err.to_string())
        }
    }

    /// Returns `true` if this failure class is eligible for automatic retry.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout | Self::Network(_))
    }

    /// Returns the synthetic status code for this failure, if one is defined.
    ///
    /// Timeouts report 408 and connectivity failures report 0, matching the
    /// envelope contract; [`Other`](Self::Other) failures carry no status.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Timeout => Some(TIMEOUT_STATUS),
            Self::Network(_) => Some(NETWORK_STATUS),
            Self::Other(_) => None,
        }
    }
}

/// Unified error type for the HTTP client layer.
///
/// Covers both pre-send problems (an unusable request path, an unencodable
/// body) and transport failures. Pattern-match to distinguish them; use
/// [`status_code`](Self::status_code) when only the envelope fields matter.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request path is empty after normalization.
    #[error("Invalid request path: '{path}'")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body")]
    Body(#[source] serde_json::Error),

    /// A pre-response transport failure.
    #[error(transparent)]
    Transport(#[from] TransportFailure),
}

impl HttpError {
    /// Returns the synthetic status code for this error, if one is defined.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport(failure) => failure.status_code(),
            Self::InvalidPath { .. } | Self::Body(_) => None,
        }
    }
}
