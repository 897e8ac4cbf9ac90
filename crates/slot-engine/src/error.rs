//! Error types for slot-engine operations.
//!
//! Every variant is an input problem detected before any slot is computed.
//! "No availability" is never an error: it is an empty slot list.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid time of day (expected HH:MM): {0}")]
    InvalidTimeOfDay(String),

    #[error("Invalid slot duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),

    #[error("Invalid weekday index: {0} (expected 0=Sunday..6=Saturday)")]
    InvalidWeekday(i64),

    #[error("Invalid datetime: {0}")]
    InvalidInstant(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    /// The query payload was not valid JSON or did not match the query shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
