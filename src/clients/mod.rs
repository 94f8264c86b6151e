//! HTTP client types for clinic API communication.
//!
//! This module provides the foundational HTTP layer for talking to the
//! clinic booking API. It handles request/response processing, per-attempt
//! timeouts, and retry with linear backoff.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async executor for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A completed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`TransportFailure`]: Closed taxonomy of pre-response failures
//! - [`HttpError`]: Unified error type for this layer
//!
//! # Retry Behavior
//!
//! The client retries transient failures with linear backoff (the wait
//! before attempt `k + 1` is `retry_delay * k`):
//!
//! - **5xx responses**: retried while attempts remain; after the ceiling the
//!   last response is returned as-is
//! - **Timeouts**: the in-flight attempt is aborted and retried
//! - **Connection failures**: retried
//! - **4xx responses**: returned immediately without retry
//!
//! Defaults (attempt ceiling 3, per-attempt timeout 30 s, base delay 1 s)
//! come from [`crate::ClinicConfig`] and can be overridden per request via
//! [`HttpRequest::builder`].

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, TransportFailure, NETWORK_STATUS, TIMEOUT_STATUS};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
