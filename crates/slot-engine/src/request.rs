//! JSON request shape shared by the CLI and the WASM binding.
//!
//! ```json
//! {
//!   "operatingHours": { "monday": {"isOpen": true, "openTime": "09:00", "closeTime": "17:00"} },
//!   "date": "2026-03-16",
//!   "serviceDurationMinutes": 60,
//!   "bookings": [{"startTime": "10:00", "endTime": "11:00", "status": "confirmed"}],
//!   "strideMinutes": 30
//! }
//! ```
//!
//! Exactly one of `date` / `weekday` selects the day. The duration comes from
//! `serviceDurationMinutes` or from an embedded `service` object.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::error::{Result, SlotError};
use crate::hours::{OperatingHours, Weekday};
use crate::service::Service;
use crate::slots::{compute_slots_for_date_with, compute_slots_with, SlotConfig, TimeSlot};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRequest {
    pub operating_hours: OperatingHours,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<Weekday>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_duration_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stride_minutes: Option<u32>,
}

/// Which day a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Date(NaiveDate),
    Weekday(Weekday),
}

impl SlotRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn target(&self) -> Result<Target> {
        match (self.date, self.weekday) {
            (Some(date), None) => Ok(Target::Date(date)),
            (None, Some(weekday)) => Ok(Target::Weekday(weekday)),
            (None, None) => Err(SlotError::InvalidRequest(
                "one of 'date' or 'weekday' is required".to_string(),
            )),
            (Some(_), Some(_)) => Err(SlotError::InvalidRequest(
                "'date' and 'weekday' are mutually exclusive".to_string(),
            )),
        }
    }

    /// The slot length in minutes.
    ///
    /// When both `serviceDurationMinutes` and `service` are given they must
    /// agree. The value itself is range-checked by slot generation.
    pub fn duration_minutes(&self) -> Result<i64> {
        if let Some(service) = &self.service {
            service.validate()?;
        }
        match (self.service_duration_minutes, &self.service) {
            (Some(minutes), None) => Ok(minutes),
            (None, Some(service)) => Ok(service.duration_minutes),
            (Some(minutes), Some(service)) if minutes == service.duration_minutes => Ok(minutes),
            (Some(minutes), Some(service)) => Err(SlotError::InvalidRequest(format!(
                "serviceDurationMinutes {} disagrees with service '{}' duration {}",
                minutes, service.id, service.duration_minutes
            ))),
            (None, None) => Err(SlotError::InvalidRequest(
                "one of 'serviceDurationMinutes' or 'service' is required".to_string(),
            )),
        }
    }

    /// Resolve the stride: an explicit override beats the request's own
    /// `strideMinutes`, which beats the default.
    pub fn config(&self, stride_override: Option<u32>) -> SlotConfig {
        stride_override
            .or(self.stride_minutes)
            .map(SlotConfig::with_stride)
            .unwrap_or_default()
    }

    pub fn evaluate(&self) -> Result<Vec<TimeSlot>> {
        self.evaluate_with(None)
    }

    pub fn evaluate_with(&self, stride_override: Option<u32>) -> Result<Vec<TimeSlot>> {
        let config = self.config(stride_override);
        let duration = self.duration_minutes()?;
        match self.target()? {
            Target::Date(date) => compute_slots_for_date_with(
                &config,
                &self.operating_hours,
                date,
                duration,
                &self.bookings,
            ),
            Target::Weekday(weekday) => compute_slots_with(
                &config,
                &self.operating_hours,
                weekday,
                duration,
                &self.bookings,
            ),
        }
    }
}
