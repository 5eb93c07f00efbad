use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::hours::WeeklyHours;

/// Timezone assumed when a business does not name one.
pub const DEFAULT_TIMEZONE: &str = "UTC";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBusinessRequest {
    pub name: String,
    pub timezone: Option<String>,
    pub hours: Option<WeeklyHours>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBusinessResponse {
    pub id: Uuid,
    pub name: String,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetBusinessResponse {
    pub id: Uuid,
    pub name: String,
    pub timezone: String,
    pub hours: Option<WeeklyHours>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateHoursRequest {
    pub hours: WeeklyHours,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateHoursResponse {
    pub id: Uuid,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub duration_minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
}
