use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::slot::CandidateSlot;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub business_id: Uuid,
    pub service_id: Uuid,
    pub date: NaiveDate,
    /// Lowercase weekday name, e.g. `"monday"`.
    pub weekday: String,
    pub is_open: bool,
    pub duration_minutes: u16,
    pub slots: Vec<CandidateSlot>,
}
