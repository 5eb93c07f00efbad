//! # Availability Handlers
//!
//! Serves the bookable slots for one business, service and date.
//!
//! The handler gathers everything the pure slot generator needs:
//!
//! 1. The business record and its posted weekly hours
//! 2. The selected service and its duration
//! 3. The current instant from the state's clock, converted to the
//!    business's timezone
//!
//! Hours that are missing or fail validation are reported as a configuration
//! error; no default schedule is substituted.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use groombook_core::{
    availability::{day_availability, local_now},
    errors::{BookingError, ScheduleError},
    models::{
        availability::AvailabilityResponse,
        hours::{weekday_key, ServiceDuration},
    },
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{handlers::business::load_business, middleware::error_handling::AppError, ApiState};

/// Query parameters for the availability endpoint
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Calendar date in the business's local frame, `YYYY-MM-DD`
    pub date: NaiveDate,

    /// Service being booked
    pub service_id: Uuid,
}

/// Lists candidate slots for a date
///
/// # Endpoint
///
/// ```text
/// GET /api/businesses/:id/availability?date=2024-01-02&service_id=uuid
/// ```
///
/// # Errors
///
/// * `BookingError::NotFound` - Unknown business, or a service it does not offer
/// * `BookingError::Configuration` - Hours missing or invalid, bad stored duration,
///   unknown timezone
/// * `BookingError::Database` - Store failure
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(business_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let business = load_business(&state, business_id).await?;

    let service = state
        .store
        .get_service(query.service_id)
        .await?
        .filter(|service| service.business_id == business_id)
        .ok_or_else(|| {
            BookingError::NotFound(format!(
                "Service with ID {} not found for business {}",
                query.service_id, business_id
            ))
        })?;

    let hours = business
        .weekly_hours()
        .inspect_err(|e| tracing::warn!("Business {} has invalid hours: {}", business_id, e))?;
    let hours = hours.ok_or(ScheduleError::HoursNotConfigured)?;
    let duration = ServiceDuration::try_from(service.duration_minutes)?;
    let now = local_now(state.clock.now(), &business.timezone)?;

    let day = day_availability(&hours, query.date, duration, now);
    tracing::debug!(
        "Availability for business={} service={} date={}: open={}, {} slots",
        business_id,
        service.id,
        query.date,
        day.is_open,
        day.slots.len()
    );

    let response = AvailabilityResponse {
        business_id,
        service_id: service.id,
        date: query.date,
        weekday: weekday_key(day.weekday).to_string(),
        is_open: day.is_open,
        duration_minutes: duration.minutes(),
        slots: day.slots,
    };

    Ok(Json(response))
}
