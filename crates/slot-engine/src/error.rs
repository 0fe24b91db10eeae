//! Error types for slot-engine operations.
//!
//! Every variant describes bad caller input. Nothing here is transient, so
//! nothing is worth retrying. A closed store is not an error: it yields an
//! empty slot list.

use thiserror::Error;

use crate::clock::ClockTime;
use crate::hours::Weekday;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid service duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),

    #[error("Invalid time '{0}': expected zero-padded 24-hour HH:MM")]
    InvalidTime(String),

    #[error("Operating hours have no entry for {0}")]
    MissingWeekday(Weekday),

    /// Open days must close strictly after they open. Hours that wrap past
    /// midnight land here as well.
    #[error("Invalid operating hours for {weekday}: open {open} is not before close {close}")]
    InvalidHours {
        weekday: Weekday,
        open: ClockTime,
        close: ClockTime,
    },

    #[error("Invalid booking {start}-{end}: end must be after start")]
    InvalidBooking { start: ClockTime, end: ClockTime },

    #[error("Invalid stride: {0} minutes (must be between 1 and 1440)")]
    InvalidStride(u32),

    #[error("Invalid service: {0}")]
    InvalidService(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
