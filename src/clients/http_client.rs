//! HTTP client for clinic API communication.
//!
//! This module provides the [`HttpClient`] type: the resilient request
//! executor behind every SDK operation. It enforces a per-attempt timeout,
//! retries transient failures with linear backoff, and hands completed
//! responses back untouched for the operations layer to interpret.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, TransportFailure};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ClinicConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the clinic API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and an optional bearer token
/// - Per-attempt timeout enforcement (aborting the in-flight attempt)
/// - Automatic retry with linear backoff for 5xx, timeout, and connection
///   failures; 4xx responses are never retried
///
/// Completed responses are returned as `Ok` regardless of status; only
/// pre-response failures surface as `Err`.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use aura_clinic_api::{BaseUrl, ClinicConfig};
/// use aura_clinic_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = ClinicConfig::builder()
///     .base_url(BaseUrl::new("https://api.auraclinic.example/api").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// let request = HttpRequest::builder(HttpMethod::Get, "appointments").build();
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.auraclinic.example/api`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Default per-attempt timeout.
    timeout: Duration,
    /// Default attempt ceiling.
    retry_attempts: u32,
    /// Base delay between attempts.
    retry_delay: Duration,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// All timeout and retry defaults are taken from `config`; individual
    /// requests may override them via the request builder.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ClinicConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Aura Clinic API Client v{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Add bearer token if configured
        if let Some(token) = config.auth_token() {
            default_headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
            timeout: config.timeout(),
            retry_attempts: config.retry_attempts(),
            retry_delay: config.retry_delay(),
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request, applying the timeout and retry policy.
    ///
    /// Each attempt runs under its own deadline; when the deadline expires
    /// the in-flight attempt is dropped, which cancels the underlying
    /// connection, and the attempt counts as a timeout failure. Failed
    /// attempts eligible for retry wait `retry_delay * attempt` before the
    /// next attempt (linear backoff), so total wall-clock cost is bounded by
    /// the attempt ceiling.
    ///
    /// Retried outcomes: responses with status >= 500, timed-out attempts,
    /// and connection failures. Everything else is final on the first
    /// occurrence — 2xx and 4xx responses are returned as-is, and
    /// non-transient transport failures propagate immediately. When the
    /// ceiling is reached the last outcome is returned, whatever it was.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The request path is empty after normalization (`InvalidPath`)
    /// - No attempt produced a response (`Transport`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Normalize the path and build the full URL
        let path = request.path.trim_start_matches('/');
        if path.is_empty() {
            return Err(HttpError::InvalidPath {
                path: request.path.clone(),
            });
        }
        let url = format!("{}/{}", self.base_url, path);

        // Merge headers
        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert(
                "Content-Type".to_string(),
                "application/json".to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let timeout = request.timeout.unwrap_or(self.timeout);
        let retries = request.retries.unwrap_or(self.retry_attempts);

        // Retry loop; `attempt <= retries` holds throughout
        let mut attempt: u32 = 1;
        loop {
            let outcome = self.perform(&url, &request, &headers, timeout).await;

            match outcome {
                Ok(response) if !response.is_server_error() || attempt >= retries => {
                    return Ok(response);
                }
                Err(failure) if !failure.is_transient() || attempt >= retries => {
                    return Err(failure.into());
                }
                Ok(response) => {
                    tracing::warn!(
                        status = response.code,
                        attempt,
                        path,
                        "server error, retrying"
                    );
                }
                Err(failure) => {
                    tracing::warn!(
                        failure = %failure,
                        attempt,
                        path,
                        "transient failure, retrying"
                    );
                }
            }

            // Linear backoff: wait retry_delay * attempt before the next attempt
            tokio::time::sleep(self.retry_delay * attempt).await;
            attempt += 1;
        }
    }

    /// Performs one physical attempt under the given deadline.
    async fn perform(
        &self,
        url: &str,
        request: &HttpRequest,
        headers: &HashMap<String, String>,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportFailure> {
        // Build the reqwest request
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let attempt = async {
            let res = req_builder
                .send()
                .await
                .map_err(TransportFailure::classify)?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body = res.text().await.map_err(TransportFailure::classify)?;

            Ok(HttpResponse::new(code, res_headers, body))
        };

        // Dropping the attempt future on deadline expiry aborts the in-flight
        // request and frees its connection.
        (tokio::time::timeout(timeout, attempt).await)
            .unwrap_or(Err(TransportFailure::Timeout))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
