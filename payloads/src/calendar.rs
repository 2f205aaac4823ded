//! Availability calendar derivation.
//!
//! The calendar is a fixed six-week window starting today. Each day is
//! classified from the venue's booked and blocked dates; blocked takes
//! precedence when a date appears in both sets.

use std::collections::HashSet;

use derive_more::Display;
use jiff::ToSpan;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::responses::Availability;

/// Six weeks of days.
pub const CALENDAR_DAYS: usize = 42;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    #[display("available")]
    Available,
    #[display("booked")]
    Booked,
    #[display("blocked")]
    Blocked,
}

impl DayStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: Date,
    pub status: DayStatus,
}

impl CalendarDay {
    pub fn day_of_month(&self) -> i8 {
        self.date.day()
    }
}

/// Blocked is checked last so it wins over booked.
pub fn classify(
    date: Date,
    booked: &HashSet<Date>,
    blocked: &HashSet<Date>,
) -> DayStatus {
    let mut status = DayStatus::Available;
    if booked.contains(&date) {
        status = DayStatus::Booked;
    }
    if blocked.contains(&date) {
        status = DayStatus::Blocked;
    }
    status
}

/// Build the 42-day grid anchored at `today`.
pub fn build_calendar(
    today: Date,
    availability: &Availability,
) -> Vec<CalendarDay> {
    let booked: HashSet<Date> =
        availability.booked_dates.iter().copied().collect();
    let blocked: HashSet<Date> =
        availability.blocked_dates.iter().copied().collect();

    today
        .series(1.day())
        .take(CALENDAR_DAYS)
        .map(|date| CalendarDay {
            date,
            status: classify(date, &booked, &blocked),
        })
        .collect()
}
