//! HTTP response types for the clinic API SDK.
//!
//! This module provides the [`HttpResponse`] type: a completed HTTP exchange,
//! whatever its status. The body is kept as raw text; typed decoding happens
//! on demand via [`HttpResponse::json`], gated on the response content type.

use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// An HTTP response from the clinic API.
///
/// Contains the status code, headers, and the raw body text. A response
/// existing at all means the server was reached; the status code may still
/// indicate failure, which the operations layer interprets.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the response status indicates a server-side failure.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.code >= 500
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Header names are matched case-insensitively (they are lowercased when
    /// the response is parsed).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns `true` if the response declares a JSON content type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aura_clinic_api::clients::HttpResponse;
    /// use std::collections::HashMap;
    ///
    /// let mut headers = HashMap::new();
    /// headers.insert(
    ///     "content-type".to_string(),
    ///     vec!["application/json; charset=utf-8".to_string()],
    /// );
    ///
    /// let response = HttpResponse::new(200, headers, "{}".to_string());
    /// assert!(response.is_json());
    /// ```
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.header("content-type")
            .is_some_and(|value| value.contains("application/json"))
    }

    /// Decodes the body into the given type.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the body is not valid JSON or does
    /// not match the target shape. Callers should check [`is_json`](Self::is_json)
    /// first; a non-JSON content type means the body was never meant to parse.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Returns the canonical reason phrase for the status code.
    #[must_use]
    pub fn status_text(&self) -> &'static str {
        reqwest::StatusCode::from_u16(self.code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Unknown Status")
    }
}
