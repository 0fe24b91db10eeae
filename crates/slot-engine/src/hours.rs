//! Weekly operating hours for a vendor.
//!
//! The table is keyed by the seven lowercase weekday names used in the vendor
//! records (`"monday"` .. `"sunday"`). Open/close times stay as raw strings on
//! [`DayHours`] because closed days may carry placeholder values; they are
//! only parsed when a day is actually open.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::{Result, SlotError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One weekday's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHours {
    pub is_open: bool,
    #[serde(default)]
    pub open_time: String,
    #[serde(default)]
    pub close_time: String,
}

impl DayHours {
    pub fn open(open_time: &str, close_time: &str) -> Self {
        Self {
            is_open: true,
            open_time: open_time.to_string(),
            close_time: close_time.to_string(),
        }
    }

    pub fn closed() -> Self {
        Self {
            is_open: false,
            open_time: String::new(),
            close_time: String::new(),
        }
    }

    /// The parsed `(open, close)` window, or `None` when the day is closed.
    ///
    /// # Errors
    /// [`SlotError::InvalidTime`] if an open day has a malformed time, and
    /// [`SlotError::InvalidHours`] if it does not close strictly after it
    /// opens. Overnight hours are not supported and fall in the latter case.
    pub fn window(&self, weekday: Weekday) -> Result<Option<(ClockTime, ClockTime)>> {
        if !self.is_open {
            return Ok(None);
        }
        let open = ClockTime::parse(&self.open_time)?;
        let close = ClockTime::parse(&self.close_time)?;
        if open >= close {
            return Err(SlotError::InvalidHours {
                weekday,
                open,
                close,
            });
        }
        Ok(Some((open, close)))
    }
}

/// A vendor's weekly schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperatingHours {
    days: BTreeMap<Weekday, DayHours>,
}

impl OperatingHours {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_day(mut self, weekday: Weekday, hours: DayHours) -> Self {
        self.days.insert(weekday, hours);
        self
    }

    /// The same hours on every day of the week.
    pub fn uniform(hours: DayHours) -> Self {
        Weekday::ALL
            .into_iter()
            .map(|day| (day, hours.clone()))
            .collect()
    }

    pub fn insert(&mut self, weekday: Weekday, hours: DayHours) -> Option<DayHours> {
        self.days.insert(weekday, hours)
    }

    /// Look up one weekday.
    ///
    /// # Errors
    /// [`SlotError::MissingWeekday`] when the table has no entry for it.
    pub fn day(&self, weekday: Weekday) -> Result<&DayHours> {
        self.days
            .get(&weekday)
            .ok_or(SlotError::MissingWeekday(weekday))
    }

    /// Entries in Monday..Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayHours)> {
        self.days.iter().map(|(day, hours)| (*day, hours))
    }

    /// Check the whole table: all seven days present, every open day
    /// well-formed. Reports the first problem in weekday order.
    pub fn validate(&self) -> Result<()> {
        for weekday in Weekday::ALL {
            self.day(weekday)?.window(weekday)?;
        }
        Ok(())
    }
}

impl FromIterator<(Weekday, DayHours)> for OperatingHours {
    fn from_iter<I: IntoIterator<Item = (Weekday, DayHours)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}
