//! Date and time rules for the schedule step.
//!
//! The widgets that draw the calendar live in the UI layer; the rules they
//! enforce live here: month navigation never goes behind the current month,
//! days before today are not selectable, and the time picker offers the full
//! 24-hour clock in half-hour slots displayed starting at noon.

use chrono::{Datelike, NaiveDate, NaiveTime};

/// A visible calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
}

impl MonthView {
    /// The initial view: today's month.
    pub fn current(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Whether navigating one month back is allowed. Navigation cannot move
    /// before today's month.
    pub fn prev_allowed(&self, today: NaiveDate) -> bool {
        (self.year, self.month) > (today.year(), today.month())
    }

    pub fn prev(&self, today: NaiveDate) -> Option<MonthView> {
        if !self.prev_allowed(today) {
            return None;
        }
        Some(if self.month == 1 {
            MonthView {
                year: self.year - 1,
                month: 12,
            }
        } else {
            MonthView {
                year: self.year,
                month: self.month - 1,
            }
        })
    }

    pub fn next(&self) -> MonthView {
        if self.month == 12 {
            MonthView {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthView {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Every day of the month, in order. Empty only for an invalid view.
    pub fn days(&self) -> Vec<NaiveDate> {
        let Some(first) = NaiveDate::from_ymd_opt(self.year, self.month, 1) else {
            return Vec::new();
        };
        let after = self.next();
        let Some(end) = NaiveDate::from_ymd_opt(after.year, after.month, 1) else {
            return Vec::new();
        };
        let mut days = Vec::new();
        let mut day = first;
        while day < end {
            days.push(day);
            let Some(next) = day.succ_opt() else { break };
            day = next;
        }
        days
    }

    /// Display label, e.g. `2025-06`.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Days before today are not selectable within the visible month.
pub fn day_selectable(day: NaiveDate, today: NaiveDate) -> bool {
    day >= today
}

/// All 48 half-hour slots, in display order: 12:00 through 23:30, wrapping
/// to 00:00 through 11:30. The stored value is always the standard clock
/// time regardless of this ordering.
pub fn time_slots() -> Vec<NaiveTime> {
    (0..48u32)
        .filter_map(|slot| {
            let hour = (12 + slot / 2) % 24;
            let minute = (slot % 2) * 30;
            NaiveTime::from_hms_opt(hour, minute, 0)
        })
        .collect()
}

/// Combines a selected date and time into the stored `YYYY-MM-DDTHH:MM`.
pub fn combine(date: NaiveDate, time: NaiveTime) -> String {
    format!("{}T{}", date.format("%Y-%m-%d"), time.format("%H:%M"))
}
