//! # slot-engine
//!
//! Deterministic booking-slot generation for the Helensvale Connect marketplace.
//!
//! Given a vendor's weekly operating hours, a day, and a service duration, the
//! engine lists every candidate start time on a fixed 30-minute stride and
//! marks the ones that collide with existing bookings. It is a pure function:
//! no I/O, no shared state, safe to call from any number of requests at once.
//!
//! ```rust
//! use slot_engine::{compute_slots, DayHours, OperatingHours, Weekday};
//!
//! let hours = OperatingHours::new().with_day(Weekday::Monday, DayHours::open("09:00", "11:00"));
//! let slots = compute_slots(&hours, Weekday::Monday, 60, &[]).unwrap();
//! let starts: Vec<String> = slots.iter().map(|s| s.start_time.to_string()).collect();
//! assert_eq!(starts, ["09:00", "09:30", "10:00"]);
//! ```
//!
//! ## Modules
//!
//! - [`clock`] -- `HH:MM` parsing into minute-of-day
//! - [`hours`] -- weekly operating-hours table
//! - [`booking`] -- existing bookings and their statuses
//! - [`service`] -- vendor services
//! - [`conflict`] -- booking/slot overlap detection
//! - [`slots`] -- slot generation
//! - [`request`] -- JSON request wrapper used by the CLI and WASM hosts
//! - [`error`] -- Error types

pub mod booking;
pub mod clock;
pub mod conflict;
pub mod error;
pub mod hours;
pub mod request;
pub mod service;
pub mod slots;

pub use booking::{Booking, BookingStatus};
pub use clock::ClockTime;
pub use error::SlotError;
pub use hours::{DayHours, OperatingHours, Weekday};
pub use request::SlotRequest;
pub use service::Service;
pub use slots::{
    compute_slots, compute_slots_for_date, compute_slots_for_date_with, compute_slots_with,
    first_available_slot, SlotConfig, TimeSlot, DEFAULT_STRIDE_MINUTES,
};
