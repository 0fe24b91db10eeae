//! Existing bookings, consulted read-only when marking slots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::{Result, SlotError};

/// Lifecycle state of a stored booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    #[default]
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Whether a booking in this state still occupies its time range.
    /// Only cancelled bookings release it.
    pub fn blocks_time(self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

/// A booking already on a vendor's calendar.
///
/// `date` is optional: callers that already filtered by day can omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(default)]
    pub status: BookingStatus,
}

impl Booking {
    /// A confirmed booking with no date attached.
    pub fn new(start_time: ClockTime, end_time: ClockTime) -> Self {
        Self {
            date: None,
            start_time,
            end_time,
            status: BookingStatus::Confirmed,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// # Errors
    /// [`SlotError::InvalidBooking`] unless `end_time > start_time`.
    pub fn validate(&self) -> Result<()> {
        if self.end_time <= self.start_time {
            return Err(SlotError::InvalidBooking {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    pub fn blocks_time(&self) -> bool {
        self.status.blocks_time()
    }

    /// Undated bookings are assumed to belong to whatever day is asked about.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.date.is_none_or(|d| d == date)
    }
}
