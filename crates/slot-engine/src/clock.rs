//! Wall-clock times of day in `HH:MM` form.
//!
//! Operating hours and bookings store times as zero-padded 24-hour strings.
//! [`ClockTime`] is the parsed minute-of-day, so slot arithmetic never touches
//! strings. `"24:00"` is accepted to mean end of day.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SlotError};

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day, stored as minutes since midnight (`0..=1440`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);
    pub const END_OF_DAY: ClockTime = ClockTime(MINUTES_PER_DAY);

    /// Build from an hour/minute pair. `None` when out of range.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if minute >= 60 {
            return None;
        }
        Self::from_minutes(hour.checked_mul(60)?.checked_add(minute)?)
    }

    /// Build from minutes since midnight. `None` past end of day.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Caller guarantees `minutes <= MINUTES_PER_DAY`.
    pub(crate) fn from_minutes_within_day(minutes: u32) -> Self {
        debug_assert!(minutes <= u32::from(MINUTES_PER_DAY));
        Self(minutes as u16)
    }

    /// Parse a zero-padded `HH:MM` string.
    ///
    /// # Errors
    /// Returns [`SlotError::InvalidTime`] for anything other than the canonical
    /// `HH:MM` form of a time within `00:00..=24:00`.
    pub fn parse(s: &str) -> Result<Self> {
        if s == "24:00" {
            return Ok(Self::END_OF_DAY);
        }
        // chrono accepts single-digit hours and surrounding padding, so only the
        // string that formats back to itself is canonical.
        match NaiveTime::parse_from_str(s, "%H:%M") {
            Ok(time) if time.format("%H:%M").to_string() == s => Ok(Self::from(time)),
            _ => Err(SlotError::InvalidTime(s.to_string())),
        }
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl From<NaiveTime> for ClockTime {
    /// Seconds are dropped.
    fn from(time: NaiveTime) -> Self {
        // hour < 24 and minute < 60, so this stays below MINUTES_PER_DAY.
        Self::from_minutes_within_day(time.hour() * 60 + time.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}
