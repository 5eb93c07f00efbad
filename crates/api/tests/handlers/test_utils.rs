use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use groombook_api::{app, ApiState};
use groombook_core::clock::FixedClock;
use groombook_db::{
    mock::MockBookingStore,
    models::{DbBusiness, DbService},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestContext {
    pub store: MockBookingStore,
    pub now: DateTime<Utc>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::at(Utc.with_ymd_and_hms(2024, 1, 1, 10, 15, 0).unwrap())
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            store: MockBookingStore::new(),
            now,
        }
    }

    // Build the router over the mock store and a frozen clock
    pub fn into_app(self) -> Router {
        let state = Arc::new(ApiState::new(
            Arc::new(self.store),
            Arc::new(FixedClock(self.now)),
        ));
        app(state)
    }
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Monday to Saturday 09:00-17:00, closed Sunday.
pub fn salon_hours() -> Value {
    let day = json!({ "isOpen": true, "openTime": "09:00", "closeTime": "17:00" });
    json!({
        "monday": day,
        "tuesday": day,
        "wednesday": day,
        "thursday": day,
        "friday": day,
        "saturday": day,
        "sunday": { "isOpen": false }
    })
}

pub fn business_fixture(id: Uuid, timezone: &str, hours: Option<Value>) -> DbBusiness {
    DbBusiness {
        id,
        name: "Paws & Claws".to_string(),
        timezone: timezone.to_string(),
        hours,
        created_at: Utc.with_ymd_and_hms(2023, 6, 1, 8, 0, 0).unwrap(),
    }
}

pub fn service_fixture(id: Uuid, business_id: Uuid, duration_minutes: i32) -> DbService {
    DbService {
        id,
        business_id,
        name: "Bath & brush".to_string(),
        duration_minutes,
        created_at: Utc.with_ymd_and_hms(2023, 6, 1, 8, 30, 0).unwrap(),
    }
}
