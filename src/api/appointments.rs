//! Appointment CRUD operations and their models.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{failure_from, http_failure, parse_data, ApiResponse, ClinicClient};
use crate::clients::HttpMethod;

/// Lifecycle status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Booked but not yet confirmed by the clinic.
    Scheduled,
    /// Confirmed by the clinic.
    Confirmed,
    /// Currently taking place.
    InProgress,
    /// Finished.
    Completed,
    /// Cancelled by either party.
    Cancelled,
}

/// An appointment record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Identifier of the appointment.
    pub id: i64,
    /// Identifier of the patient.
    pub patient_id: i64,
    /// Display name of the patient, when the API includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    /// Identifier of the doctor.
    pub doctor_id: i64,
    /// Display name of the doctor, when the API includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    /// Medical specialty of the appointment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    /// Calendar date of the appointment.
    pub date: NaiveDate,
    /// Time of day, when scheduled to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Lifecycle status.
    pub status: AppointmentStatus,
    /// Free-form description entered at booking time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Notes added by clinic staff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When the record was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for booking a new appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    /// Identifier of the patient.
    pub patient_id: i64,
    /// Identifier of the doctor.
    pub doctor_id: i64,
    /// Medical specialty, if the booking flow selects one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    /// Calendar date.
    pub date: NaiveDate,
    /// Time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Duration in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial payload for updating an appointment.
///
/// Every field is optional; absent fields are omitted from the request body
/// and left unchanged by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    /// New date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// New time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// New duration in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// New lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New staff notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ClinicClient {
    /// Lists all appointments.
    pub async fn list_appointments(&self) -> ApiResponse<Vec<Appointment>> {
        match self.execute(HttpMethod::Get, "appointments").await {
            Ok(response) if response.is_ok() => {
                parse_data(&response, "Appointments listed successfully")
            }
            Ok(response) => http_failure("Failed to list appointments", &response),
            Err(err) => failure_from(&err),
        }
    }

    /// Retrieves one appointment by id.
    ///
    /// A 404 response yields the well-known "Appointment not found" failure.
    pub async fn get_appointment(&self, id: impl Display + Send) -> ApiResponse<Appointment> {
        let path = format!("appointments/{id}");
        match self.execute(HttpMethod::Get, &path).await {
            Ok(response) if response.is_ok() => {
                parse_data(&response, "Appointment retrieved successfully")
            }
            Ok(response) if response.code == 404 => {
                ApiResponse::failed("Appointment not found", Some(404))
            }
            Ok(response) => http_failure("Failed to retrieve appointment", &response),
            Err(err) => failure_from(&err),
        }
    }

    /// Books a new appointment.
    pub async fn create_appointment(
        &self,
        appointment: &CreateAppointmentRequest,
    ) -> ApiResponse<Appointment> {
        match self
            .execute_json(HttpMethod::Post, "appointments", appointment)
            .await
        {
            Ok(response) if response.is_ok() => {
                parse_data(&response, "Appointment scheduled successfully")
            }
            Ok(response) => http_failure("Failed to schedule appointment", &response),
            Err(err) => failure_from(&err),
        }
    }

    /// Updates an existing appointment.
    ///
    /// A 404 response yields the well-known "Appointment not found" failure.
    pub async fn update_appointment(
        &self,
        id: impl Display + Send,
        changes: &UpdateAppointmentRequest,
    ) -> ApiResponse<Appointment> {
        let path = format!("appointments/{id}");
        match self.execute_json(HttpMethod::Put, &path, changes).await {
            Ok(response) if response.is_ok() => {
                parse_data(&response, "Appointment updated successfully")
            }
            Ok(response) if response.code == 404 => {
                ApiResponse::failed("Appointment not found", Some(404))
            }
            Ok(response) => http_failure("Failed to update appointment", &response),
            Err(err) => failure_from(&err),
        }
    }

    /// Cancels an appointment.
    ///
    /// A 404 response yields the well-known "Appointment not found" failure.
    /// The success envelope carries no payload.
    pub async fn delete_appointment(&self, id: impl Display + Send) -> ApiResponse<()> {
        let path = format!("appointments/{id}");
        match self.execute(HttpMethod::Delete, &path).await {
            Ok(response) if response.is_ok() => {
                ApiResponse::ok_message("Appointment cancelled successfully")
            }
            Ok(response) if response.code == 404 => {
                ApiResponse::failed("Appointment not found", Some(404))
            }
            Ok(response) => http_failure("Failed to cancel appointment", &response),
            Err(err) => failure_from(&err),
        }
    }
}
