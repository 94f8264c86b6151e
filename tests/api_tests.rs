//! Integration tests for the high-level operations layer.
//!
//! Every operation must resolve to an envelope, never an `Err`, with the
//! well-known messages for 401 login, 404 appointment lookups, and the
//! always-successful logout.

use std::time::Duration;

use aura_clinic_api::{
    AppointmentStatus, AuthToken, BaseUrl, ClinicClient, ClinicConfig, ContactMessage,
    CreateAppointmentRequest, LoginCredentials, UpdateAppointmentRequest, UserRole,
};
use chrono::NaiveDate;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(uri: &str) -> ClinicConfig {
    ClinicConfig::builder()
        .base_url(BaseUrl::new(uri).unwrap())
        .timeout(Duration::from_secs(2))
        .retry_attempts(1)
        .retry_delay(Duration::from_millis(10))
        .build()
        .unwrap()
}

fn test_client(server: &MockServer) -> ClinicClient {
    ClinicClient::new(&test_config(&server.uri()))
}

fn appointment_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "patientId": 1,
        "doctorId": 2,
        "date": "2026-09-15",
        "status": "scheduled"
    })
}

#[tokio::test]
async fn test_login_success_parses_auth_payload() {
    let server = MockServer::start().await;
    let credentials = LoginCredentials {
        email: "ana@example.com".to_string(),
        password: "hunter2".to_string(),
    };
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(&credentials))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Ana Souza",
            "email": "ana@example.com",
            "role": "patient",
            "token": "session-token",
            "userId": 42
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = test_client(&server).login(&credentials).await;

    assert!(response.is_success());
    assert_eq!(response.message.as_deref(), Some("Login successful"));
    let auth = response.data.unwrap();
    assert_eq!(auth.role, UserRole::Patient);
    assert_eq!(auth.user_id, 42);
    assert_eq!(auth.token, "session-token");
}

#[tokio::test]
async fn test_login_401_reports_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let response = test_client(&server)
        .login(&LoginCredentials {
            email: "ana@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await;

    assert!(!response.is_success());
    assert_eq!(response.error.as_deref(), Some("Invalid credentials"));
    assert_eq!(response.status_code, Some(401));
    assert!(response.data.is_none());
}

#[tokio::test]
async fn test_authenticated_client_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server.uri())
        .with_auth_token(AuthToken::new("session-token").unwrap());
    let response = ClinicClient::new(&config).list_appointments().await;

    assert!(response.is_success());
}

#[tokio::test]
async fn test_logout_succeeds_even_when_server_rejects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let response = test_client(&server).logout().await;

    assert!(response.is_success());
    assert_eq!(
        response.message.as_deref(),
        Some("Logout completed successfully")
    );
    assert!(response.error.is_none());
}

#[tokio::test]
async fn test_logout_succeeds_locally_when_server_unreachable() {
    let client = ClinicClient::new(&test_config("http://127.0.0.1:9"));

    let response = client.logout().await;

    assert!(response.is_success());
    assert_eq!(response.message.as_deref(), Some("Logout completed locally"));
}

#[tokio::test]
async fn test_send_contact_message_success_has_no_payload() {
    let server = MockServer::start().await;
    let message = ContactMessage {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        phone: None,
        subject: Some("Scheduling".to_string()),
        message: "Do you take walk-ins?".to_string(),
    };
    Mock::given(method("POST"))
        .and(path("/contact"))
        .and(body_json(&message))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let response = test_client(&server).send_contact_message(&message).await;

    assert!(response.is_success());
    assert_eq!(response.message.as_deref(), Some("Message sent successfully"));
    assert!(response.data.is_none());
}

#[tokio::test]
async fn test_send_contact_message_failure_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;

    let response = test_client(&server)
        .send_contact_message(&ContactMessage {
            name: "Ana".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            subject: None,
            message: "hi".to_string(),
        })
        .await;

    assert!(!response.is_success());
    assert_eq!(response.status_code, Some(422));
    assert!(response
        .error
        .as_deref()
        .unwrap()
        .starts_with("Failed to send message"));
}

#[tokio::test]
async fn test_list_appointments_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([appointment_json(1), appointment_json(2)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = test_client(&server).list_appointments().await;

    assert!(response.is_success());
    assert_eq!(
        response.message.as_deref(),
        Some("Appointments listed successfully")
    );
    let appointments = response.data.unwrap();
    assert_eq!(appointments.len(), 2);
    assert_eq!(appointments[0].id, 1);
    assert_eq!(appointments[1].status, AppointmentStatus::Scheduled);
}

#[tokio::test]
async fn test_get_appointment_404_reports_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appointments/99"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let response = test_client(&server).get_appointment(99).await;

    assert!(!response.is_success());
    assert_eq!(response.error.as_deref(), Some("Appointment not found"));
    assert_eq!(response.status_code, Some(404));
}

#[tokio::test]
async fn test_get_appointment_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appointments/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(appointment_json(10)))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let first = client.get_appointment(10).await;
    let second = client.get_appointment(10).await;

    assert!(first.is_success());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_create_appointment_returns_created_record() {
    let server = MockServer::start().await;
    let booking = CreateAppointmentRequest {
        patient_id: 1,
        doctor_id: 2,
        specialty: Some("cardiology".to_string()),
        date: NaiveDate::from_ymd_opt(2026, 9, 15).unwrap(),
        time: None,
        duration: Some(30),
        description: None,
    };
    Mock::given(method("POST"))
        .and(path("/appointments"))
        .and(body_json(&booking))
        .respond_with(ResponseTemplate::new(201).set_body_json(appointment_json(77)))
        .expect(1)
        .mount(&server)
        .await;

    let response = test_client(&server).create_appointment(&booking).await;

    assert!(response.is_success());
    assert_eq!(
        response.message.as_deref(),
        Some("Appointment scheduled successfully")
    );
    assert_eq!(response.data.unwrap().id, 77);
}

#[tokio::test]
async fn test_update_appointment_sends_only_changed_fields() {
    let server = MockServer::start().await;
    let changes = UpdateAppointmentRequest {
        status: Some(AppointmentStatus::Confirmed),
        ..UpdateAppointmentRequest::default()
    };
    Mock::given(method("PUT"))
        .and(path("/appointments/10"))
        .and(body_json(serde_json::json!({"status": "confirmed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(appointment_json(10)))
        .expect(1)
        .mount(&server)
        .await;

    let response = test_client(&server).update_appointment(10, &changes).await;

    assert!(response.is_success());
    assert_eq!(
        response.message.as_deref(),
        Some("Appointment updated successfully")
    );
}

#[tokio::test]
async fn test_update_appointment_404_reports_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/appointments/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let response = test_client(&server)
        .update_appointment(99, &UpdateAppointmentRequest::default())
        .await;

    assert!(!response.is_success());
    assert_eq!(response.error.as_deref(), Some("Appointment not found"));
}

#[tokio::test]
async fn test_delete_appointment_success_has_no_payload() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/appointments/10"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = test_client(&server).delete_appointment(10).await;

    assert!(response.is_success());
    assert_eq!(
        response.message.as_deref(),
        Some("Appointment cancelled successfully")
    );
    assert!(response.data.is_none());
}

#[tokio::test]
async fn test_delete_appointment_404_reports_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/appointments/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let response = test_client(&server).delete_appointment(99).await;

    assert!(!response.is_success());
    assert_eq!(response.error.as_deref(), Some("Appointment not found"));
    assert_eq!(response.status_code, Some(404));
}

#[tokio::test]
async fn test_non_json_success_body_is_a_failure_without_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>maintenance</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let response = test_client(&server).list_appointments().await;

    assert!(!response.is_success());
    assert_eq!(
        response.error.as_deref(),
        Some("Response body is not valid JSON")
    );
    assert!(response.status_code.is_none());
}

#[tokio::test]
async fn test_timeout_surfaces_as_408_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let config = ClinicConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .timeout(Duration::from_millis(50))
        .retry_attempts(1)
        .build()
        .unwrap();
    let response = ClinicClient::new(&config).list_appointments().await;

    assert!(!response.is_success());
    assert_eq!(response.error.as_deref(), Some("Request timed out"));
    assert_eq!(response.status_code, Some(408));
}

#[tokio::test]
async fn test_network_failure_surfaces_as_status_zero_envelope() {
    let client = ClinicClient::new(&test_config("http://127.0.0.1:9"));

    let response = client.list_appointments().await;

    assert!(!response.is_success());
    assert_eq!(response.status_code, Some(0));
    assert!(response
        .error
        .as_deref()
        .unwrap()
        .starts_with("Could not connect to the server"));
}

#[tokio::test]
async fn test_server_error_after_retries_carries_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appointments"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let config = ClinicConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .retry_attempts(2)
        .retry_delay(Duration::from_millis(10))
        .build()
        .unwrap();
    let response = ClinicClient::new(&config).list_appointments().await;

    assert!(!response.is_success());
    assert_eq!(
        response.error.as_deref(),
        Some("Failed to list appointments: Service Unavailable")
    );
    assert_eq!(response.status_code, Some(503));
}
