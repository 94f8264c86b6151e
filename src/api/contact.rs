//! Contact form operation.

use serde::{Deserialize, Serialize};

use crate::api::{failure_from, http_failure, ApiResponse, ClinicClient};
use crate::clients::HttpMethod;

/// A message submitted through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Sender phone number, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Message subject, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Message body.
    pub message: String,
}

impl ClinicClient {
    /// Submits a contact form message.
    ///
    /// The success envelope carries no payload, only a confirmation message.
    pub async fn send_contact_message(&self, message: &ContactMessage) -> ApiResponse<()> {
        match self.execute_json(HttpMethod::Post, "contact", message).await {
            Ok(response) if response.is_ok() => ApiResponse::ok_message("Message sent successfully"),
            Ok(response) => http_failure("Failed to send message", &response),
            Err(err) => failure_from(&err),
        }
    }
}
