use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::{business_fixture, get, salon_hours, send, service_fixture, TestContext};

struct Fixture {
    business_id: Uuid,
    service_id: Uuid,
}

fn expect_business(ctx: &mut TestContext, timezone: &str, hours: Option<Value>) -> Fixture {
    let fixture = Fixture {
        business_id: Uuid::new_v4(),
        service_id: Uuid::new_v4(),
    };
    let business = business_fixture(fixture.business_id, timezone, hours);

    ctx.store
        .expect_get_business()
        .with(predicate::eq(fixture.business_id))
        .times(1)
        .returning(move |_| Ok(Some(business.clone())));

    fixture
}

fn expect_service(ctx: &mut TestContext, fixture: &Fixture, duration_minutes: i32) {
    let service = service_fixture(fixture.service_id, fixture.business_id, duration_minutes);

    ctx.store
        .expect_get_service()
        .with(predicate::eq(fixture.service_id))
        .times(1)
        .returning(move |_| Ok(Some(service.clone())));
}

fn availability_uri(fixture: &Fixture, date: &str) -> String {
    format!(
        "/api/businesses/{}/availability?date={}&service_id={}",
        fixture.business_id, date, fixture.service_id
    )
}

fn slot_times(body: &Value) -> Vec<String> {
    body["slots"]
        .as_array()
        .expect("slots array")
        .iter()
        .map(|slot| slot["time"].as_str().unwrap().to_string())
        .collect()
}

#[test_log::test(tokio::test)]
async fn test_availability_marks_past_slots() {
    let mut ctx = TestContext::new();
    let fixture = expect_business(&mut ctx, "UTC", Some(salon_hours()));
    expect_service(&mut ctx, &fixture, 60);

    // Clock reads 2024-01-01 10:15 UTC, a Monday
    let (status, body) = send(ctx.into_app(), get(&availability_uri(&fixture, "2024-01-01"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["business_id"], json!(fixture.business_id));
    assert_eq!(body["service_id"], json!(fixture.service_id));
    assert_eq!(body["date"], json!("2024-01-01"));
    assert_eq!(body["weekday"], json!("monday"));
    assert_eq!(body["is_open"], json!(true));
    assert_eq!(body["duration_minutes"], json!(60));

    let slots = body["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 15);
    assert_eq!(
        slots[0],
        json!({ "time": "09:00", "available": false, "reason": "Hora pasada" })
    );
    assert_eq!(slots[2]["time"], json!("10:00"));
    assert_eq!(slots[2]["available"], json!(false));
    assert_eq!(slots[3], json!({ "time": "10:30", "available": true }));
    assert_eq!(slots[14], json!({ "time": "16:00", "available": true }));
}

#[tokio::test]
async fn test_availability_future_date() {
    let mut ctx = TestContext::new();
    let fixture = expect_business(&mut ctx, "UTC", Some(salon_hours()));
    expect_service(&mut ctx, &fixture, 90);

    let (status, body) = send(ctx.into_app(), get(&availability_uri(&fixture, "2024-01-02"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weekday"], json!("tuesday"));
    let times = slot_times(&body);
    assert_eq!(times.len(), 14);
    assert_eq!(times.last().map(String::as_str), Some("15:30"));
    assert!(body["slots"]
        .as_array()
        .unwrap()
        .iter()
        .all(|slot| slot["available"] == json!(true)));
}

#[tokio::test]
async fn test_availability_closed_day() {
    let mut ctx = TestContext::new();
    let fixture = expect_business(&mut ctx, "UTC", Some(salon_hours()));
    expect_service(&mut ctx, &fixture, 60);

    let (status, body) = send(ctx.into_app(), get(&availability_uri(&fixture, "2024-01-07"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weekday"], json!("sunday"));
    assert_eq!(body["is_open"], json!(false));
    assert_eq!(body["slots"], json!([]));
}

#[tokio::test]
async fn test_availability_uses_business_timezone() {
    // 15:00 UTC is 10:00 in New York
    let mut ctx = TestContext::at(Utc.with_ymd_and_hms(2024, 1, 1, 15, 0, 0).unwrap());
    let fixture = expect_business(&mut ctx, "America/New_York", Some(salon_hours()));
    expect_service(&mut ctx, &fixture, 30);

    let (status, body) = send(ctx.into_app(), get(&availability_uri(&fixture, "2024-01-01"))).await;

    assert_eq!(status, StatusCode::OK);
    let past: Vec<&str> = body["slots"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|slot| slot["available"] == json!(false))
        .map(|slot| slot["time"].as_str().unwrap())
        .collect();
    assert_eq!(past, vec!["09:00", "09:30", "10:00"]);
}

#[tokio::test]
async fn test_availability_business_not_found() {
    let mut ctx = TestContext::new();
    let business_id = Uuid::new_v4();

    ctx.store
        .expect_get_business()
        .with(predicate::eq(business_id))
        .returning(|_| Ok(None));

    let uri = format!(
        "/api/businesses/{}/availability?date=2024-01-02&service_id={}",
        business_id,
        Uuid::new_v4()
    );
    let (status, body) = send(ctx.into_app(), get(&uri)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_availability_service_of_other_business() {
    let mut ctx = TestContext::new();
    let fixture = expect_business(&mut ctx, "UTC", Some(salon_hours()));
    let foreign = service_fixture(fixture.service_id, Uuid::new_v4(), 60);

    ctx.store
        .expect_get_service()
        .returning(move |_| Ok(Some(foreign.clone())));

    let (status, _) = send(ctx.into_app(), get(&availability_uri(&fixture, "2024-01-02"))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_availability_hours_not_configured() {
    let mut ctx = TestContext::new();
    let fixture = expect_business(&mut ctx, "UTC", None);
    expect_service(&mut ctx, &fixture, 60);

    let (status, body) = send(ctx.into_app(), get(&availability_uri(&fixture, "2024-01-02"))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({ "error": "Invalid business configuration: Business hours are not configured" })
    );
}

#[tokio::test]
async fn test_availability_invalid_stored_hours() {
    let mut ctx = TestContext::new();
    let mut hours = salon_hours();
    hours["tuesday"] = json!({ "isOpen": true, "openTime": "18:00", "closeTime": "09:00" });
    let fixture = expect_business(&mut ctx, "UTC", Some(hours));
    expect_service(&mut ctx, &fixture, 60);

    let (status, body) = send(ctx.into_app(), get(&availability_uri(&fixture, "2024-01-02"))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Opening time 18:00 must be before closing time 09:00"));
}

#[tokio::test]
async fn test_availability_invalid_stored_duration() {
    let mut ctx = TestContext::new();
    let fixture = expect_business(&mut ctx, "UTC", Some(salon_hours()));
    expect_service(&mut ctx, &fixture, 0);

    let (status, _) = send(ctx.into_app(), get(&availability_uri(&fixture, "2024-01-02"))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_availability_unknown_timezone() {
    let mut ctx = TestContext::new();
    let fixture = expect_business(&mut ctx, "Atlantis/Capital", Some(salon_hours()));
    expect_service(&mut ctx, &fixture, 60);

    let (status, body) = send(ctx.into_app(), get(&availability_uri(&fixture, "2024-01-02"))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("Atlantis/Capital"));
}

#[tokio::test]
async fn test_availability_malformed_date() {
    let ctx = TestContext::new();
    let uri = format!(
        "/api/businesses/{}/availability?date=2024-13-01&service_id={}",
        Uuid::new_v4(),
        Uuid::new_v4()
    );

    let (status, _) = send(ctx.into_app(), get(&uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_availability_database_error() {
    let mut ctx = TestContext::new();
    ctx.store
        .expect_get_business()
        .returning(|_| Err(eyre::eyre!("connection refused")));

    let uri = format!(
        "/api/businesses/{}/availability?date=2024-01-02&service_id={}",
        Uuid::new_v4(),
        Uuid::new_v4()
    );
    let (status, _) = send(ctx.into_app(), get(&uri)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
