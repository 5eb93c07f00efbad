//! # Day Availability
//!
//! Thin wrapper over [`generate_slots`] that resolves the weekday schedule and
//! the business-local reference instant.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc, Weekday};
use chrono_tz::Tz;

use crate::{
    errors::ScheduleError,
    models::{
        hours::{ServiceDuration, WeeklyHours},
        slot::CandidateSlot,
    },
    slots::generate_slots,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAvailability {
    pub weekday: Weekday,
    pub is_open: bool,
    pub slots: Vec<CandidateSlot>,
}

/// Candidate slots for `date`, using the schedule of its weekday.
pub fn day_availability(
    hours: &WeeklyHours,
    date: NaiveDate,
    duration: ServiceDuration,
    now: NaiveDateTime,
) -> DayAvailability {
    let weekday = date.weekday();
    let schedule = hours.day(weekday);

    DayAvailability {
        weekday,
        is_open: schedule.is_open(),
        slots: generate_slots(date, schedule, duration, now).collect(),
    }
}

/// Wall-clock time at `now` in the IANA zone `timezone`.
pub fn local_now(now: DateTime<Utc>, timezone: &str) -> Result<NaiveDateTime, ScheduleError> {
    let tz = parse_timezone(timezone)?;
    Ok(now.with_timezone(&tz).naive_local())
}

pub fn parse_timezone(timezone: &str) -> Result<Tz, ScheduleError> {
    timezone
        .parse::<Tz>()
        .map_err(|_| ScheduleError::UnknownTimezone(timezone.to_string()))
}
