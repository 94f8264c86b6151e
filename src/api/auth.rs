//! Authentication operations: login and logout.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::{failure_from, http_failure, parse_data, ApiResponse, ClinicClient};
use crate::clients::HttpMethod;

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A patient booking appointments.
    Patient,
    /// A doctor attending appointments.
    Doctor,
    /// A clinic administrator.
    Admin,
}

/// Credentials submitted to the login endpoint.
///
/// The `Debug` implementation masks the password to keep it out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"*****")
            .finish()
    }
}

/// Successful login payload: the session token and the user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Display name of the user.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Role of the user.
    pub role: UserRole,
    /// Session token for authenticated calls.
    pub token: String,
    /// Identifier of the user record.
    pub user_id: i64,
}

impl ClinicClient {
    /// Authenticates with the API.
    ///
    /// A 401 response yields the well-known "Invalid credentials" failure;
    /// other non-2xx statuses carry their reason phrase. On success the
    /// returned [`AuthResponse`] holds the session token, which can be fed
    /// back through [`crate::ClinicConfig::with_auth_token`] to construct an
    /// authenticated client.
    pub async fn login(&self, credentials: &LoginCredentials) -> ApiResponse<AuthResponse> {
        match self.execute_json(HttpMethod::Post, "login", credentials).await {
            Ok(response) if response.is_ok() => parse_data(&response, "Login successful"),
            Ok(response) if response.code == 401 => {
                ApiResponse::failed("Invalid credentials", Some(401))
            }
            Ok(response) => http_failure("Authentication failed", &response),
            Err(err) => failure_from(&err),
        }
    }

    /// Ends the session.
    ///
    /// Always resolves to a success envelope: client-side session teardown
    /// must proceed whether or not the server is reachable. A reachable
    /// server (any status) reports "Logout completed successfully"; a
    /// transport failure reports "Logout completed locally". Failures are
    /// logged, never surfaced.
    pub async fn logout(&self) -> ApiResponse<()> {
        match self.execute(HttpMethod::Post, "logout").await {
            Ok(response) => {
                if !response.is_ok() {
                    tracing::warn!(
                        status = response.code,
                        "logout rejected by the API, proceeding anyway"
                    );
                }
                ApiResponse::ok_message("Logout completed successfully")
            }
            Err(err) => {
                tracing::error!(error = %err, "logout request failed, completing locally");
                ApiResponse::ok_message("Logout completed locally")
            }
        }
    }
}
