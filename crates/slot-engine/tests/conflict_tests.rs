//! Tests for booking/slot overlap detection.

use slot_engine::conflict::{blocking_bookings, is_blocked, overlaps};
use slot_engine::{Booking, BookingStatus, ClockTime, TimeSlot};

fn t(s: &str) -> ClockTime {
    ClockTime::parse(s).unwrap()
}

fn booking(start: &str, end: &str) -> Booking {
    Booking::new(t(start), t(end))
}

fn slot(start: &str, end: &str) -> TimeSlot {
    TimeSlot {
        start_time: t(start),
        end_time: t(end),
        available: true,
    }
}

#[test]
fn partial_overlap_detected() {
    // Slot 09:00-10:00, booking 09:30-10:30 → 30-min overlap
    let bookings = vec![booking("09:30", "10:30")];

    let conflicts = blocking_bookings(&slot("09:00", "10:00"), &bookings);

    assert_eq!(conflicts.len(), 1, "should detect exactly one conflict");
    assert_eq!(conflicts[0].overlap_minutes, 30);
}

#[test]
fn non_overlapping_booking_no_conflict() {
    let bookings = vec![booking("11:00", "12:00")];

    let conflicts = blocking_bookings(&slot("09:00", "10:00"), &bookings);

    assert!(
        conflicts.is_empty(),
        "non-overlapping booking should not conflict"
    );
}

#[test]
fn adjacent_booking_not_a_conflict() {
    // Slot 09:00-10:00, booking 10:00-11:00 → adjacent, NOT overlapping
    assert!(!overlaps(t("09:00"), t("10:00"), t("10:00"), t("11:00")));
    assert!(!overlaps(t("10:00"), t("11:00"), t("09:00"), t("10:00")));

    let bookings = vec![booking("10:00", "11:00")];
    assert!(!is_blocked(t("09:00"), t("10:00"), &bookings));
}

#[test]
fn contained_booking_reports_its_own_length() {
    // Slot 09:00-12:00, booking 10:00-11:00 fully inside
    let bookings = vec![booking("10:00", "11:00")];

    let conflicts = blocking_bookings(&slot("09:00", "12:00"), &bookings);

    assert_eq!(conflicts.len(), 1);
    assert_eq!(
        conflicts[0].overlap_minutes, 60,
        "overlap should be the duration of the booking (60 min)"
    );
}

#[test]
fn multiple_conflicts_in_input_order() {
    let bookings = vec![
        booking("09:45", "10:15"),
        booking("13:00", "14:00"), // outside
        booking("09:00", "09:15"),
    ];

    let conflicts = blocking_bookings(&slot("09:00", "10:00"), &bookings);

    assert_eq!(conflicts.len(), 2);
    assert_eq!(conflicts[0].booking.start_time, t("09:45"));
    assert_eq!(conflicts[0].overlap_minutes, 15);
    assert_eq!(conflicts[1].booking.start_time, t("09:00"));
    assert_eq!(conflicts[1].overlap_minutes, 15);
}

#[test]
fn cancelled_booking_never_blocks() {
    let bookings = vec![booking("09:00", "10:00").with_status(BookingStatus::Cancelled)];

    assert!(!is_blocked(t("09:00"), t("10:00"), &bookings));
    assert!(blocking_bookings(&slot("09:00", "10:00"), &bookings).is_empty());
}

#[test]
fn pending_and_completed_bookings_block() {
    for status in [BookingStatus::Pending, BookingStatus::Completed] {
        let bookings = vec![booking("09:00", "10:00").with_status(status)];
        assert!(
            is_blocked(t("09:00"), t("10:00"), &bookings),
            "{:?} booking should block",
            status
        );
    }
}

#[test]
fn empty_booking_list_no_conflicts() {
    let none: Vec<Booking> = Vec::new();
    assert!(blocking_bookings(&slot("09:00", "10:00"), &none).is_empty());
    assert!(!is_blocked(t("09:00"), t("10:00"), &none));
}
