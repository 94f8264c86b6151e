//! The normalized result envelope returned by every API operation.

use serde::{Deserialize, Serialize};

/// Uniform success/failure envelope for API operations.
///
/// Every operation on [`crate::ClinicClient`] resolves to one of these
/// instead of returning `Err`: callers never see raw transport errors.
/// Exactly one of `data` (on success) or `error` (on failure) is meaningful.
///
/// `status_code` is present whenever a transport-level status is known: the
/// HTTP status for completed non-2xx responses, 408 for timeouts, 0 for
/// connection failures. It is absent for failures classified before any
/// status existed (e.g., a success response whose body is not JSON).
///
/// # Example
///
/// ```rust
/// use aura_clinic_api::ApiResponse;
///
/// let ok: ApiResponse<u32> = ApiResponse::ok(7, "Loaded");
/// assert!(ok.is_success());
/// assert_eq!(ok.data, Some(7));
///
/// let failed: ApiResponse<u32> = ApiResponse::failed("Not found", Some(404));
/// assert!(!failed.is_success());
/// assert_eq!(failed.status_code, Some(404));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The parsed payload; present only on success, and only for operations
    /// that return data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable confirmation text; present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Human-readable failure text; present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The transport-level status code, when one is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl<T> ApiResponse<T> {
    /// Creates a success envelope carrying a payload.
    #[must_use]
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
            status_code: None,
        }
    }

    /// Creates a success envelope for an operation with no payload.
    #[must_use]
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
            status_code: None,
        }
    }

    /// Creates a failure envelope.
    #[must_use]
    pub fn failed(error: impl Into<String>, status_code: Option<u16>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
            status_code,
        }
    }

    /// Returns `true` if the operation succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }
}
