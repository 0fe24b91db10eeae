//! Bookable slot generation.
//!
//! Candidate slots start at the day's opening time and advance by a fixed
//! stride (30 minutes by default), so a 60-minute service in a 09:00-11:00
//! window yields 09:00, 09:30 and 10:00 starts. Slots overlap one another on
//! purpose: customers get more start times to choose from. A slot is emitted
//! only while it ends at or before closing time.
//!
//! Slots that overlap an existing booking are kept with `available = false`
//! so the calendar can render them disabled instead of hiding them.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::booking::Booking;
use crate::clock::{ClockTime, MINUTES_PER_DAY};
use crate::conflict;
use crate::error::{Result, SlotError};
use crate::hours::{OperatingHours, Weekday};

pub const DEFAULT_STRIDE_MINUTES: u32 = 30;

/// Tunables for slot generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlotConfig {
    /// Minutes between successive candidate start times.
    pub stride_minutes: u32,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            stride_minutes: DEFAULT_STRIDE_MINUTES,
        }
    }
}

impl SlotConfig {
    pub fn with_stride(stride_minutes: u32) -> Self {
        Self { stride_minutes }
    }

    /// The stride must be `1..=1440`; anything past a full day can never
    /// produce a second slot.
    pub fn validate(&self) -> Result<()> {
        if self.stride_minutes == 0 || self.stride_minutes > u32::from(MINUTES_PER_DAY) {
            return Err(SlotError::InvalidStride(self.stride_minutes));
        }
        Ok(())
    }
}

/// A candidate bookable window. Derived per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub available: bool,
}

impl TimeSlot {
    pub fn duration_minutes(&self) -> u16 {
        self.end_time.minutes() - self.start_time.minutes()
    }
}

/// Compute the slots for `weekday` with the default 30-minute stride.
///
/// # Arguments
/// - `hours` -- the vendor's weekly operating hours
/// - `weekday` -- day of the week to generate for
/// - `service_duration_minutes` -- length of each slot; must be positive
/// - `bookings` -- existing bookings for that day; every non-cancelled one
///   marks the slots it overlaps as unavailable
///
/// Returns an empty list when the store is closed that day or when the
/// service does not fit between opening and closing.
///
/// # Errors
/// - [`SlotError::MissingWeekday`] if `hours` has no entry for `weekday`
/// - [`SlotError::InvalidTime`] / [`SlotError::InvalidHours`] for a malformed
///   or inverted open day (overnight hours are not supported)
/// - [`SlotError::InvalidDuration`] if the duration is zero or negative
/// - [`SlotError::InvalidBooking`] if a booking ends at or before it starts
pub fn compute_slots(
    hours: &OperatingHours,
    weekday: Weekday,
    service_duration_minutes: i64,
    bookings: &[Booking],
) -> Result<Vec<TimeSlot>> {
    compute_slots_with(
        &SlotConfig::default(),
        hours,
        weekday,
        service_duration_minutes,
        bookings,
    )
}

/// [`compute_slots`] with an explicit [`SlotConfig`].
pub fn compute_slots_with(
    config: &SlotConfig,
    hours: &OperatingHours,
    weekday: Weekday,
    service_duration_minutes: i64,
    bookings: &[Booking],
) -> Result<Vec<TimeSlot>> {
    generate(config, hours, weekday, service_duration_minutes, bookings.iter())
}

/// Compute the slots for a calendar date.
///
/// The weekday comes from `date`. Bookings dated for a different day are
/// ignored; undated bookings always count.
pub fn compute_slots_for_date(
    hours: &OperatingHours,
    date: NaiveDate,
    service_duration_minutes: i64,
    bookings: &[Booking],
) -> Result<Vec<TimeSlot>> {
    compute_slots_for_date_with(
        &SlotConfig::default(),
        hours,
        date,
        service_duration_minutes,
        bookings,
    )
}

/// [`compute_slots_for_date`] with an explicit [`SlotConfig`].
pub fn compute_slots_for_date_with(
    config: &SlotConfig,
    hours: &OperatingHours,
    date: NaiveDate,
    service_duration_minutes: i64,
    bookings: &[Booking],
) -> Result<Vec<TimeSlot>> {
    let weekday = Weekday::from(date.weekday());
    generate(
        config,
        hours,
        weekday,
        service_duration_minutes,
        bookings.iter().filter(|b| b.falls_on(date)),
    )
}

/// The earliest slot still open for booking.
pub fn first_available_slot(slots: &[TimeSlot]) -> Option<TimeSlot> {
    slots.iter().find(|slot| slot.available).copied()
}

fn generate<'a, I>(
    config: &SlotConfig,
    hours: &OperatingHours,
    weekday: Weekday,
    service_duration_minutes: i64,
    bookings: I,
) -> Result<Vec<TimeSlot>>
where
    I: IntoIterator<Item = &'a Booking>,
{
    config.validate()?;

    // A closed day short-circuits before any other input is looked at.
    let Some((open, close)) = hours.day(weekday)?.window(weekday)? else {
        debug!(%weekday, "store closed, no slots");
        return Ok(Vec::new());
    };

    if service_duration_minutes <= 0 {
        return Err(SlotError::InvalidDuration(service_duration_minutes));
    }

    let bookings: Vec<&Booking> = bookings.into_iter().collect();
    for booking in &bookings {
        booking.validate()?;
    }

    let open_minutes = u32::from(open.minutes());
    let close_minutes = u32::from(close.minutes());
    if service_duration_minutes > i64::from(close_minutes - open_minutes) {
        debug!(
            %weekday,
            %open,
            %close,
            duration = service_duration_minutes,
            "service longer than opening window, no slots"
        );
        return Ok(Vec::new());
    }
    // Fits in u32: bounded by the opening window above.
    let duration = service_duration_minutes as u32;

    let mut slots = Vec::new();
    let mut start = open_minutes;
    while let Some(end) = start.checked_add(duration).filter(|&end| end <= close_minutes) {
        let start_time = ClockTime::from_minutes_within_day(start);
        let end_time = ClockTime::from_minutes_within_day(end);
        let available = !conflict::is_blocked(start_time, end_time, bookings.iter().copied());
        slots.push(TimeSlot {
            start_time,
            end_time,
            available,
        });
        match start.checked_add(config.stride_minutes) {
            Some(next) => start = next,
            None => break,
        }
    }

    debug!(
        %weekday,
        %open,
        %close,
        duration,
        stride = config.stride_minutes,
        bookings = bookings.len(),
        total = slots.len(),
        unavailable = slots.iter().filter(|s| !s.available).count(),
        "computed slots"
    );

    Ok(slots)
}
