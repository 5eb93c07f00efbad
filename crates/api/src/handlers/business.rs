use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use groombook_core::{
    availability::parse_timezone,
    errors::BookingError,
    models::{
        business::{
            CreateBusinessRequest, CreateBusinessResponse, CreateServiceRequest,
            GetBusinessResponse, ServiceResponse, UpdateHoursRequest, UpdateHoursResponse,
            DEFAULT_TIMEZONE,
        },
        hours::{ServiceDuration, WeeklyHours},
    },
};
use groombook_db::models::DbBusiness;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

fn hours_record(hours: &WeeklyHours) -> Result<serde_json::Value, BookingError> {
    hours
        .to_json_value()
        .map_err(|e| BookingError::Internal(Box::new(e)))
}

fn required_name(name: &str, what: &str) -> Result<String, BookingError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BookingError::Validation(format!("{what} name must not be empty")));
    }
    Ok(name.to_string())
}

pub(crate) async fn load_business(state: &ApiState, id: Uuid) -> Result<DbBusiness, BookingError> {
    state
        .store
        .get_business(id)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Business with ID {} not found", id)))
}

#[axum::debug_handler]
pub async fn create_business(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBusinessRequest>,
) -> Result<(StatusCode, Json<CreateBusinessResponse>), AppError> {
    let name = required_name(&payload.name, "Business")?;

    let timezone = payload
        .timezone
        .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
    parse_timezone(&timezone).map_err(|e| BookingError::Validation(e.to_string()))?;

    let hours = payload.hours.as_ref().map(hours_record).transpose()?;

    let business = state.store.create_business(name, timezone, hours).await?;
    tracing::info!("Created business {} ({})", business.id, business.name);

    let response = CreateBusinessResponse {
        id: business.id,
        name: business.name,
        timezone: business.timezone,
        created_at: business.created_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn get_business(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetBusinessResponse>, AppError> {
    let business = load_business(&state, id).await?;
    let hours = business.weekly_hours()?;

    let response = GetBusinessResponse {
        id: business.id,
        name: business.name,
        timezone: business.timezone,
        hours,
        created_at: business.created_at,
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn update_hours(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateHoursRequest>,
) -> Result<Json<UpdateHoursResponse>, AppError> {
    let record = hours_record(&payload.hours)?;

    state
        .store
        .update_business_hours(id, record)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Business with ID {} not found", id)))?;
    let open_days = payload.hours.iter().filter(|(_, day)| day.is_open()).count();
    tracing::info!("Updated hours for business {} ({} open days)", id, open_days);

    let response = UpdateHoursResponse {
        id,
        updated_at: state.clock.now(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    load_business(&state, id).await?;

    let services = state.store.list_services(id).await?;

    Ok(Json(services.into_iter().map(ServiceResponse::from).collect()))
}

#[axum::debug_handler]
pub async fn create_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<ServiceResponse>), AppError> {
    let name = required_name(&payload.name, "Service")?;
    let duration = ServiceDuration::new(payload.duration_minutes)
        .map_err(|e| BookingError::Validation(e.to_string()))?;

    load_business(&state, id).await?;

    let service = state
        .store
        .create_service(id, name, i32::from(duration.minutes()))
        .await?;

    Ok((StatusCode::CREATED, Json(ServiceResponse::from(service))))
}
