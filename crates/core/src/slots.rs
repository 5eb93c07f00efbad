//! # Slot Generation
//!
//! Produces the candidate appointment start times for one date.
//!
//! Starting at the opening time, a cursor advances in fixed
//! [`SLOT_STEP_MINUTES`] steps while it is before closing time. Each cursor is
//! checked on its own: it is emitted only when the whole service fits before
//! closing, so slots that would overrun are dropped rather than flagged.
//! Emitted slots whose date and time are not after `now` are marked
//! unavailable with [`PAST_TIME_REASON`].
//!
//! All inputs share one local frame; no timezone conversion happens here.
//!
//! ```
//! use chrono::NaiveDate;
//! use groombook_core::models::hours::{DaySchedule, ServiceDuration};
//! use groombook_core::slots::generate_slots;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//! let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let day = DaySchedule::parse("09:00", "11:00").unwrap();
//! let duration = ServiceDuration::new(60).unwrap();
//!
//! let times: Vec<String> = generate_slots(date, &day, duration, now)
//!     .map(|slot| slot.time.to_string())
//!     .collect();
//! assert_eq!(times, ["09:00", "09:30", "10:00"]);
//! ```
//!
//! [`PAST_TIME_REASON`]: crate::models::slot::PAST_TIME_REASON

use std::iter::FusedIterator;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{
    hours::{ClockTime, DaySchedule, ServiceDuration},
    slot::CandidateSlot,
};

/// Distance between consecutive candidate start times.
pub const SLOT_STEP_MINUTES: u16 = 30;

/// Lazy, finite sequence of [`CandidateSlot`] in ascending time order.
#[derive(Debug, Clone)]
pub struct Slots {
    date: NaiveDate,
    now: NaiveDateTime,
    cursor: u16,
    close: u16,
    duration: u16,
}

/// Candidate slots for `date` under `schedule`.
///
/// A closed day yields nothing. `now` must be expressed in the same local
/// frame as the schedule and `date`.
pub fn generate_slots(
    date: NaiveDate,
    schedule: &DaySchedule,
    duration: ServiceDuration,
    now: NaiveDateTime,
) -> Slots {
    let (cursor, close) = match *schedule {
        DaySchedule::Closed => (0, 0),
        DaySchedule::Open(window) => (window.open().minutes(), window.close().minutes()),
    };
    debug_assert!(duration.minutes() > 0, "service duration must be positive");

    Slots {
        date,
        now,
        cursor,
        close,
        duration: duration.minutes(),
    }
}

impl Iterator for Slots {
    type Item = CandidateSlot;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.close {
            let start = self.cursor;
            self.cursor += SLOT_STEP_MINUTES;

            if u32::from(start) + u32::from(self.duration) > u32::from(self.close) {
                continue;
            }

            // cursor < close < 1440, so this is always a valid time of day
            let time = ClockTime::from_minutes(start)?;
            let starts_at = self.date.and_time(time.to_naive_time());

            return Some(if starts_at <= self.now {
                CandidateSlot::past(time)
            } else {
                CandidateSlot::available(time)
            });
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.close.saturating_sub(self.cursor);
        let upper = remaining.div_ceil(SLOT_STEP_MINUTES);
        (0, Some(usize::from(upper)))
    }
}

impl FusedIterator for Slots {}
