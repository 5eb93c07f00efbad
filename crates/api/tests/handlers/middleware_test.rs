use axum::http::StatusCode;
use groombook_api::middleware::error_handling::{map_error, AppError};
use groombook_core::errors::{BookingError, ScheduleError};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

use crate::test_utils::{get, send, TestContext};

#[rstest]
#[case(BookingError::NotFound("Business".to_string()), StatusCode::NOT_FOUND)]
#[case(BookingError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(
    BookingError::Configuration(ScheduleError::HoursNotConfigured),
    StatusCode::UNPROCESSABLE_ENTITY
)]
#[case(BookingError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(
    BookingError::Internal(Box::new(std::io::Error::other("Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: BookingError, #[case] status: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), status);
}

#[test]
fn test_schedule_error_is_configuration() {
    let AppError(error) = AppError::from(ScheduleError::MissingDay("monday"));

    assert!(matches!(
        error,
        BookingError::Configuration(ScheduleError::MissingDay("monday"))
    ));
}

#[tokio::test]
async fn test_error_body_is_json() {
    let response = map_error(BookingError::NotFound("Service".to_string()));
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body, json!({ "error": "Resource not found: Service" }));
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(TestContext::new().into_app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_version() {
    let (status, body) = send(TestContext::new().into_app(), get("/version")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], json!("groombook-api"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
}
