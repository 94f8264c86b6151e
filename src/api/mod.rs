//! High-level API operations for the clinic booking service.
//!
//! This module provides [`ClinicClient`], the operations layer every caller
//! uses. Each operation wraps the resilient executor in a classification step
//! that converts whatever happened — a parsed response, a non-2xx status, a
//! timeout, a dead network — into an [`ApiResponse`] envelope. Operations
//! never return `Err` and never panic.
//!
//! # Example
//!
//! ```rust,ignore
//! use aura_clinic_api::{BaseUrl, ClinicClient, ClinicConfig};
//!
//! let config = ClinicConfig::builder()
//!     .base_url(BaseUrl::new("https://api.auraclinic.example/api").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ClinicClient::new(&config);
//!
//! let listing = client.list_appointments().await;
//! if listing.is_success() {
//!     for appointment in listing.data.unwrap_or_default() {
//!         println!("{} at {}", appointment.id, appointment.date);
//!     }
//! } else {
//!     eprintln!("{}", listing.error.unwrap_or_default());
//! }
//! ```

mod appointments;
mod auth;
mod contact;
mod envelope;

pub use appointments::{
    Appointment, AppointmentStatus, CreateAppointmentRequest, UpdateAppointmentRequest,
};
pub use auth::{AuthResponse, LoginCredentials, UserRole};
pub use contact::ContactMessage;
pub use envelope::ApiResponse;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::ClinicConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Failure text for a success response whose body is not JSON.
const NOT_JSON_ERROR: &str = "Response body is not valid JSON";

/// Client for the clinic booking API.
///
/// Owns a configured [`HttpClient`] and exposes the eight logical operations
/// of the service. Construct one per deployment configuration; it is cheap to
/// share across tasks.
///
/// # Thread Safety
///
/// `ClinicClient` is `Send + Sync`.
#[derive(Debug)]
pub struct ClinicClient {
    http: HttpClient,
}

// Verify ClinicClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClinicClient>();
};

impl ClinicClient {
    /// Creates a new client from the given configuration.
    #[must_use]
    pub fn new(config: &ClinicConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Returns the underlying HTTP client, for callers that need to issue
    /// requests outside the fixed operation set.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Sends a bodiless request through the executor.
    pub(crate) async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(method, path).build();
        self.http.request(request).await
    }

    /// Sends a request with a JSON body through the executor.
    pub(crate) async fn execute_json<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<HttpResponse, HttpError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let body = serde_json::to_value(body).map_err(HttpError::Body)?;
        let request = HttpRequest::builder(method, path).body(body).build();
        self.http.request(request).await
    }
}

/// Converts an executor error into a failure envelope.
///
/// Transport failures carry their synthetic status (408 for timeout, 0 for
/// network); everything else surfaces as an unknown failure with no status.
pub(crate) fn failure_from<T>(err: &HttpError) -> ApiResponse<T> {
    ApiResponse::failed(err.to_string(), err.status_code())
}

/// Builds a failure envelope for a completed non-2xx response.
pub(crate) fn http_failure<T>(context: &str, response: &HttpResponse) -> ApiResponse<T> {
    ApiResponse::failed(
        format!("{context}: {}", response.status_text()),
        Some(response.code),
    )
}

/// Parses a 2xx response body into a success envelope.
///
/// A non-JSON content type, or a body that fails to deserialize, is an
/// unknown failure with no status code — the status said success but the
/// payload is unusable.
pub(crate) fn parse_data<T: DeserializeOwned>(
    response: &HttpResponse,
    message: &str,
) -> ApiResponse<T> {
    if !response.is_json() {
        return ApiResponse::failed(NOT_JSON_ERROR, None);
    }

    match response.json::<T>() {
        Ok(data) => ApiResponse::ok(data, message),
        Err(_) => ApiResponse::failed(NOT_JSON_ERROR, None),
    }
}
