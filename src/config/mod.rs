//! Configuration types for the clinic API SDK.
//!
//! This module provides the core configuration types used to initialize the
//! SDK for communication with the clinic booking API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClinicConfig`]: The main configuration struct holding all SDK settings
//! - [`ClinicConfigBuilder`]: A builder for constructing [`ClinicConfig`] instances
//! - [`BaseUrl`]: A validated API base URL newtype
//! - [`AuthToken`]: A validated bearer token newtype with masked debug output
//!
//! Every timing and retry default lives here and is injected into the HTTP
//! client at construction time; nothing reads ambient module-level state.
//!
//! # Example
//!
//! ```rust
//! use aura_clinic_api::{BaseUrl, ClinicConfig};
//! use std::time::Duration;
//!
//! let config = ClinicConfig::builder()
//!     .base_url(BaseUrl::new("https://api.auraclinic.example/api").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.retry_attempts(), 3);
//! ```

mod newtypes;

pub use newtypes::{AuthToken, BaseUrl};

use crate::error::ConfigError;
use std::time::Duration;

/// Default per-attempt timeout (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Default attempt ceiling for a logical request.
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// Default base delay between attempts; the wait before attempt `k + 1`
/// is this value multiplied by `k`.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1_000);

/// Configuration for the clinic API SDK.
///
/// This struct holds everything the HTTP layer needs: the API origin, the
/// per-attempt timeout, the retry ceiling and base backoff delay, and an
/// optional bearer token for authenticated calls.
///
/// # Thread Safety
///
/// `ClinicConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use aura_clinic_api::{BaseUrl, ClinicConfig};
///
/// let config = ClinicConfig::builder()
///     .base_url(BaseUrl::new("https://api.auraclinic.example/api").unwrap())
///     .retry_attempts(5)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.retry_attempts(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct ClinicConfig {
    base_url: BaseUrl,
    timeout: Duration,
    retry_attempts: u32,
    retry_delay: Duration,
    auth_token: Option<AuthToken>,
    user_agent_prefix: Option<String>,
}

impl ClinicConfig {
    /// Creates a new builder for constructing a `ClinicConfig`.
    #[must_use]
    pub fn builder() -> ClinicConfigBuilder {
        ClinicConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-attempt timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the attempt ceiling for a logical request.
    #[must_use]
    pub const fn retry_attempts(&self) -> u32 {
        self.retry_attempts
    }

    /// Returns the base delay between attempts.
    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Returns the bearer token, if configured.
    #[must_use]
    pub const fn auth_token(&self) -> Option<&AuthToken> {
        self.auth_token.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns a copy of this configuration carrying the given bearer token.
    ///
    /// Useful after login: build an authenticated client from the same
    /// deployment settings without reassembling them.
    ///
    /// # Example
    ///
    /// ```rust
    /// use aura_clinic_api::{AuthToken, BaseUrl, ClinicConfig};
    ///
    /// let config = ClinicConfig::builder()
    ///     .base_url(BaseUrl::new("https://api.auraclinic.example/api").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let authed = config.with_auth_token(AuthToken::new("token").unwrap());
    /// assert!(authed.auth_token().is_some());
    /// ```
    #[must_use]
    pub fn with_auth_token(&self, token: AuthToken) -> Self {
        let mut config = self.clone();
        config.auth_token = Some(token);
        config
    }
}

// Verify ClinicConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClinicConfig>();
};

/// Builder for constructing [`ClinicConfig`] instances.
///
/// The only required field is `base_url`. All other fields have the
/// deployment defaults documented below.
///
/// # Defaults
///
/// - `timeout`: 30 seconds ([`DEFAULT_TIMEOUT`])
/// - `retry_attempts`: 3 ([`DEFAULT_RETRY_ATTEMPTS`])
/// - `retry_delay`: 1 second ([`DEFAULT_RETRY_DELAY`])
/// - `auth_token`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ClinicConfigBuilder {
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    retry_attempts: Option<u32>,
    retry_delay: Option<Duration>,
    auth_token: Option<AuthToken>,
    user_agent_prefix: Option<String>,
}

impl ClinicConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the per-attempt timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the attempt ceiling for a logical request.
    ///
    /// This is the total number of physical attempts, not the number of
    /// retries after the first attempt. A value of 0 behaves like 1: the
    /// first attempt always runs.
    #[must_use]
    pub const fn retry_attempts(mut self, attempts: u32) -> Self {
        self.retry_attempts = Some(attempts);
        self
    }

    /// Sets the base delay between attempts.
    ///
    /// The wait before attempt `k + 1` is `retry_delay * k` (linear backoff).
    #[must_use]
    pub const fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    /// Sets the bearer token sent as `Authorization: Bearer <token>`.
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClinicConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<ClinicConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(ClinicConfig {
            base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            retry_attempts: self.retry_attempts.unwrap_or(DEFAULT_RETRY_ATTEMPTS),
            retry_delay: self.retry_delay.unwrap_or(DEFAULT_RETRY_DELAY),
            auth_token: self.auth_token,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
