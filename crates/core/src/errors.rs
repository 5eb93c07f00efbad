use thiserror::Error;

/// Malformed schedule or catalog data, caught where a stored record or a
/// request body is decoded into the typed hours model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Malformed time {0:?}, expected zero-padded HH:MM")]
    MalformedTime(String),

    #[error("Open day is missing its {0} time")]
    MissingTime(&'static str),

    #[error("Opening time {open} must be before closing time {close}")]
    EmptyWindow { open: String, close: String },

    #[error("No schedule for {0}")]
    MissingDay(&'static str),

    #[error("Service duration must be between 1 and 1440 minutes, got {0}")]
    InvalidDuration(i64),

    #[error("Business hours are not configured")]
    HoursNotConfigured,

    #[error("Unknown timezone {0:?}")]
    UnknownTimezone(String),

    #[error("Invalid business hours record: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid business configuration: {0}")]
    Configuration(#[from] ScheduleError),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type BookingResult<T> = Result<T, BookingError>;
