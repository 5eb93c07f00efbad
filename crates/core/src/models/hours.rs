//! # Business Hours
//!
//! Typed weekly open-hours model. Stored records and request bodies use a
//! camelCase JSON object keyed by lowercase weekday name:
//!
//! ```json
//! { "monday": { "isOpen": true, "openTime": "09:00", "closeTime": "17:00" },
//!   "sunday": { "isOpen": false } }
//! ```
//!
//! All seven weekdays are required. Times on a closed day are never read, so
//! they may be absent or stale. Every value that crosses into the slot
//! generator has been validated here.

use std::{fmt, str::FromStr};

use chrono::{Duration, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::ScheduleError;

/// Minutes in one day, the exclusive upper bound of a [`ClockTime`].
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Weekdays in schedule order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Lowercase English name used as the JSON key for a weekday.
pub fn weekday_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// A wall-clock time of day with whole-minute granularity.
///
/// Parsed from and rendered as zero-padded 24h `HH:MM`. Ordering follows
/// minutes since midnight, which matches lexicographic order of the text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::default() + Duration::minutes(i64::from(self.0))
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ScheduleError::MalformedTime(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(malformed());
        }

        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(malformed());
        }
        let [h1, h2, m1, m2] = digits.map(|b| u16::from(b - b'0'));

        Self::from_hm(h1 * 10 + h2, m1 * 10 + m2).ok_or_else(malformed)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// Non-empty opening window, `open < close`.
///
/// Built only through [`OpenWindow::new`] or [`DaySchedule::open`]:
///
/// ```compile_fail
/// use groombook_core::models::hours::{ClockTime, OpenWindow};
///
/// let open: ClockTime = "18:00".parse().unwrap();
/// let close: ClockTime = "09:00".parse().unwrap();
/// let window = OpenWindow { open, close };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenWindow {
    open: ClockTime,
    close: ClockTime,
}

impl OpenWindow {
    /// Rejects windows where `open >= close`.
    pub fn new(open: ClockTime, close: ClockTime) -> Result<Self, ScheduleError> {
        if open >= close {
            return Err(ScheduleError::EmptyWindow {
                open: open.to_string(),
                close: close.to_string(),
            });
        }
        Ok(Self { open, close })
    }

    pub fn open(self) -> ClockTime {
        self.open
    }

    pub fn close(self) -> ClockTime {
        self.close
    }
}

/// Open window (or closed flag) for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDaySchedule", into = "RawDaySchedule")]
pub enum DaySchedule {
    Closed,
    Open(OpenWindow),
}

impl DaySchedule {
    /// Builds an open day, rejecting windows where `open >= close`.
    pub fn open(open: ClockTime, close: ClockTime) -> Result<Self, ScheduleError> {
        OpenWindow::new(open, close).map(Self::Open)
    }

    /// Parses `HH:MM` strings into an open day.
    pub fn parse(open: &str, close: &str) -> Result<Self, ScheduleError> {
        Self::open(open.parse()?, close.parse()?)
    }

    /// The opening window, if the day is open.
    pub fn window(&self) -> Option<OpenWindow> {
        match *self {
            Self::Closed => None,
            Self::Open(window) => Some(window),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDaySchedule {
    is_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    open_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    close_time: Option<String>,
}

impl TryFrom<RawDaySchedule> for DaySchedule {
    type Error = ScheduleError;

    fn try_from(raw: RawDaySchedule) -> Result<Self, Self::Error> {
        if !raw.is_open {
            return Ok(Self::Closed);
        }
        let open = raw.open_time.ok_or(ScheduleError::MissingTime("opening"))?;
        let close = raw.close_time.ok_or(ScheduleError::MissingTime("closing"))?;
        Self::parse(&open, &close)
    }
}

impl From<DaySchedule> for RawDaySchedule {
    fn from(day: DaySchedule) -> Self {
        match day {
            DaySchedule::Closed => Self {
                is_open: false,
                open_time: None,
                close_time: None,
            },
            DaySchedule::Open(window) => Self {
                is_open: true,
                open_time: Some(window.open().to_string()),
                close_time: Some(window.close().to_string()),
            },
        }
    }
}

/// One [`DaySchedule`] per weekday, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWeeklyHours", into = "RawWeeklyHours")]
pub struct WeeklyHours {
    days: [DaySchedule; 7],
}

impl WeeklyHours {
    /// Builds a week from days ordered Monday to Sunday.
    pub fn new(days: [DaySchedule; 7]) -> Self {
        Self { days }
    }

    /// Same window every day of the week.
    pub fn uniform(day: DaySchedule) -> Self {
        Self { days: [day; 7] }
    }

    /// Returns a copy with one weekday replaced.
    pub fn with_day(mut self, weekday: Weekday, day: DaySchedule) -> Self {
        self.days[weekday.num_days_from_monday() as usize] = day;
        self
    }

    pub fn day(&self, weekday: Weekday) -> &DaySchedule {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        WEEKDAYS.into_iter().zip(self.days.iter())
    }

    /// Decodes a stored hours record.
    ///
    /// Shape errors (wrong types, unknown keys) become [`ScheduleError::Decode`];
    /// content errors keep their specific variant.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ScheduleError> {
        let raw: RawWeeklyHours =
            serde_json::from_value(value).map_err(|e| ScheduleError::Decode(e.to_string()))?;
        Self::try_from(raw)
    }

    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWeeklyHours {
    monday: Option<RawDaySchedule>,
    tuesday: Option<RawDaySchedule>,
    wednesday: Option<RawDaySchedule>,
    thursday: Option<RawDaySchedule>,
    friday: Option<RawDaySchedule>,
    saturday: Option<RawDaySchedule>,
    sunday: Option<RawDaySchedule>,
}

impl TryFrom<RawWeeklyHours> for WeeklyHours {
    type Error = ScheduleError;

    fn try_from(raw: RawWeeklyHours) -> Result<Self, Self::Error> {
        let raw_days = [
            raw.monday,
            raw.tuesday,
            raw.wednesday,
            raw.thursday,
            raw.friday,
            raw.saturday,
            raw.sunday,
        ];

        let mut days = [DaySchedule::Closed; 7];
        for ((slot, raw_day), weekday) in days.iter_mut().zip(raw_days).zip(WEEKDAYS) {
            let raw_day = raw_day.ok_or(ScheduleError::MissingDay(weekday_key(weekday)))?;
            *slot = DaySchedule::try_from(raw_day)?;
        }

        Ok(Self { days })
    }
}

impl From<WeeklyHours> for RawWeeklyHours {
    fn from(hours: WeeklyHours) -> Self {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] =
            hours.days.map(|day| Some(RawDaySchedule::from(day)));
        Self {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
        }
    }
}

/// Minutes needed to perform a service, between 1 and one full day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u16")]
pub struct ServiceDuration(u16);

impl ServiceDuration {
    pub fn new(minutes: i64) -> Result<Self, ScheduleError> {
        if (1..=i64::from(MINUTES_PER_DAY)).contains(&minutes) {
            Ok(Self(minutes as u16))
        } else {
            Err(ScheduleError::InvalidDuration(minutes))
        }
    }

    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl TryFrom<i32> for ServiceDuration {
    type Error = ScheduleError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<ServiceDuration> for u16 {
    fn from(value: ServiceDuration) -> Self {
        value.0
    }
}
