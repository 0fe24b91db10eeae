//! Detect bookings that overlap a candidate slot.
//!
//! Two half-open ranges overlap when `a.start < b.end && b.start < a.end`.
//! Adjacent ranges (one ends exactly when the other starts) are NOT conflicts.

use crate::booking::Booking;
use crate::clock::ClockTime;
use crate::slots::TimeSlot;

/// A booking that overlaps a candidate range.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict<'a> {
    pub booking: &'a Booking,
    pub overlap_minutes: u16,
}

pub fn overlaps(
    a_start: ClockTime,
    a_end: ClockTime,
    b_start: ClockTime,
    b_end: ClockTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Whether any time-blocking booking overlaps `[start, end)`.
/// Cancelled bookings are skipped.
pub fn is_blocked<'a, I>(start: ClockTime, end: ClockTime, bookings: I) -> bool
where
    I: IntoIterator<Item = &'a Booking>,
{
    bookings
        .into_iter()
        .any(|b| b.blocks_time() && overlaps(start, end, b.start_time, b.end_time))
}

/// Every time-blocking booking overlapping `slot`, in input order, with the
/// length of the shared range.
pub fn blocking_bookings<'a>(slot: &TimeSlot, bookings: &'a [Booking]) -> Vec<Conflict<'a>> {
    let (start, end) = (slot.start_time, slot.end_time);
    bookings
        .iter()
        .filter(|b| b.blocks_time() && overlaps(start, end, b.start_time, b.end_time))
        .map(|booking| {
            let overlap_start = start.max(booking.start_time);
            let overlap_end = end.min(booking.end_time);
            Conflict {
                booking,
                overlap_minutes: overlap_end.minutes() - overlap_start.minutes(),
            }
        })
        .collect()
}
