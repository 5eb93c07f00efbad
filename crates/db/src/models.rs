use chrono::{DateTime, Utc};
use groombook_core::{
    errors::ScheduleError,
    models::{business::ServiceResponse, hours::WeeklyHours},
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBusiness {
    pub id: Uuid,
    pub name: String,
    pub timezone: String,
    pub hours: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl DbBusiness {
    /// Decodes the stored hours record, `None` when the owner never posted one.
    pub fn weekly_hours(&self) -> Result<Option<WeeklyHours>, ScheduleError> {
        self.hours
            .clone()
            .map(WeeklyHours::from_json_value)
            .transpose()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub business_id: Uuid,
    pub name: String,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
}

impl From<DbService> for ServiceResponse {
    fn from(service: DbService) -> Self {
        Self {
            id: service.id,
            business_id: service.business_id,
            name: service.name,
            duration_minutes: service.duration_minutes,
            created_at: service.created_at,
        }
    }
}
