use serde::{Deserialize, Serialize};

use super::hours::ClockTime;

/// Reason attached to slots whose start is not after the reference instant.
pub const PAST_TIME_REASON: &str = "Hora pasada";

/// A bookable start time on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub time: ClockTime,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CandidateSlot {
    pub fn available(time: ClockTime) -> Self {
        Self {
            time,
            available: true,
            reason: None,
        }
    }

    pub fn past(time: ClockTime) -> Self {
        Self {
            time,
            available: false,
            reason: Some(PAST_TIME_REASON.to_string()),
        }
    }
}
