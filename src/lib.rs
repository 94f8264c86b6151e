//! # Aura Clinic API Client
//!
//! A Rust client SDK for the Aura Clinic appointment-booking API, providing
//! type-safe configuration, a resilient HTTP executor with timeout and retry
//! handling, and high-level operations that resolve to a uniform result
//! envelope.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ClinicConfig`] and [`ClinicConfigBuilder`]
//! - Validated newtypes for the API origin and bearer tokens
//! - An async HTTP client with per-attempt timeouts and linear-backoff retry
//!   for transient failures (5xx responses, timeouts, connection errors)
//! - High-level operations (auth, contact, appointment CRUD) that never throw:
//!   every call resolves to an [`ApiResponse`] envelope
//!
//! ## Quick Start
//!
//! ```rust
//! use aura_clinic_api::{BaseUrl, ClinicClient, ClinicConfig};
//!
//! let config = ClinicConfig::builder()
//!     .base_url(BaseUrl::new("https://api.auraclinic.example/api").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ClinicClient::new(&config);
//! ```
//!
//! ## Making API Calls
//!
//! ```rust,ignore
//! use aura_clinic_api::{CreateAppointmentRequest, LoginCredentials};
//! use chrono::NaiveDate;
//!
//! // Authenticate
//! let login = client
//!     .login(&LoginCredentials {
//!         email: "ana@example.com".to_string(),
//!         password: "secret".to_string(),
//!     })
//!     .await;
//!
//! if let Some(auth) = login.data {
//!     // Construct an authenticated client from the session token
//!     let authed = ClinicClient::new(
//!         &config.with_auth_token(aura_clinic_api::AuthToken::new(auth.token).unwrap()),
//!     );
//!
//!     // Book an appointment
//!     let booked = authed
//!         .create_appointment(&CreateAppointmentRequest {
//!             patient_id: auth.user_id,
//!             doctor_id: 2,
//!             specialty: Some("cardiology".to_string()),
//!             date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
//!             time: None,
//!             duration: Some(30),
//!             description: None,
//!         })
//!         .await;
//!
//!     assert!(booked.is_success());
//! }
//! ```
//!
//! ## Failure Handling
//!
//! Operations never return `Err`. A failed call resolves to an envelope with
//! `success = false`, a human-readable `error`, and a `status_code` whenever
//! one is known: the HTTP status for non-2xx responses, 408 for timeouts, 0
//! for connection failures, and none for unknown failures. Transient failures
//! are retried up to the configured attempt ceiling before the envelope is
//! built; 4xx responses are never retried.
//!
//! One deliberate exception to uniformity: [`ClinicClient::logout`] always
//! reports success, because client-side session teardown must not block on
//! server reachability.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Uniform results**: Callers branch on the envelope, never on exceptions

pub mod api;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use api::{
    ApiResponse, Appointment, AppointmentStatus, AuthResponse, ClinicClient, ContactMessage,
    CreateAppointmentRequest, LoginCredentials, UpdateAppointmentRequest, UserRole,
};
pub use config::{
    AuthToken, BaseUrl, ClinicConfig, ClinicConfigBuilder, DEFAULT_RETRY_ATTEMPTS,
    DEFAULT_RETRY_DELAY, DEFAULT_TIMEOUT,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    TransportFailure,
};
