//! HTTP request types for the clinic API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the clinic booking API.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// HTTP methods supported by the clinic API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the clinic API.
///
/// All bodies are JSON; the client sets `Content-Type: application/json`
/// whenever a body is present. The `timeout` and `retries` fields override
/// the configured defaults for this one logical request.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use aura_clinic_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "appointments")
///     .body(json!({"patientId": 1, "doctorId": 2, "date": "2026-09-01"}))
///     .retries(5)
///     .build();
///
/// assert_eq!(request.retries, Some(5));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Per-request override of the per-attempt timeout.
    pub timeout: Option<Duration>,
    /// Per-request override of the attempt ceiling.
    pub retries: Option<u32>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
    timeout: Option<Duration>,
    retries: Option<u32>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: None,
            extra_headers: None,
            timeout: None,
            retries: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Overrides the per-attempt timeout for this request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the attempt ceiling for this request.
    ///
    /// This is the total number of physical attempts. A value of 0 behaves
    /// like 1: the first attempt always runs.
    #[must_use]
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
            timeout: self.timeout,
            retries: self.retries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_creates_get_request_without_overrides() {
        let request = HttpRequest::builder(HttpMethod::Get, "appointments").build();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "appointments");
        assert!(request.body.is_none());
        assert!(request.timeout.is_none());
        assert!(request.retries.is_none());
    }

    #[test]
    fn test_builder_with_body_and_overrides() {
        let request = HttpRequest::builder(HttpMethod::Post, "contact")
            .body(json!({"name": "Ana", "email": "ana@example.com", "message": "hi"}))
            .timeout(Duration::from_secs(5))
            .retries(2)
            .build();

        assert!(request.body.is_some());
        assert_eq!(request.timeout, Some(Duration::from_secs(5)));
        assert_eq!(request.retries, Some(2));
    }

    #[test]
    fn test_builder_with_query_params() {
        let request = HttpRequest::builder(HttpMethod::Get, "appointments")
            .query_param("status", "scheduled")
            .query_param("doctorId", "7")
            .build();

        let query = request.query.unwrap();
        assert_eq!(query.get("status"), Some(&"scheduled".to_string()));
        assert_eq!(query.get("doctorId"), Some(&"7".to_string()));
    }

    #[test]
    fn test_builder_with_extra_headers() {
        let request = HttpRequest::builder(HttpMethod::Get, "appointments")
            .header("X-Request-Source", "kiosk")
            .build();

        let headers = request.extra_headers.unwrap();
        assert_eq!(headers.get("X-Request-Source"), Some(&"kiosk".to_string()));
    }
}
