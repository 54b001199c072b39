//! # Week numbers
//!
//! The face shows the week of the year as `WW-n`. Three numbering policies are supported and
//! they deliberately disagree for the same date:
//!
//! - [`WeekPolicy::DayOfYear`] counts seven day blocks from the day of the year and bumps the
//!   count early in the week, approximating ISO week numbers. Always 1 to 53.
//! - [`WeekPolicy::SundayWeeks`] counts the Sundays since 1 January (`strftime`'s `%U`). Days
//!   before the first Sunday are week 0.
//! - [`WeekPolicy::MondayWeeks`] counts the Mondays since 1 January (`strftime`'s `%W`). Days
//!   before the first Monday are week 0.
//!
//! Weekdays are numbered from Sunday = 0.

use core::fmt::Write;

use chrono::{Datelike, NaiveDate};
use heapless::String;

/// Capacity of the label buffer in bytes
pub const LABEL_CAPACITY: usize = 9;

/// Week numbering policy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WeekPolicy {
    DayOfYear,
    SundayWeeks,
    MondayWeeks,
}

impl WeekPolicy {
    /// Week number of `date`
    pub fn week_number(self, date: NaiveDate) -> u8 {
        let day_of_year = date.ordinal();
        let weekday = date.weekday().num_days_from_sunday();

        match self {
            WeekPolicy::DayOfYear => day_of_year_week(day_of_year, weekday),
            WeekPolicy::SundayWeeks => first_weekday_week(day_of_year, weekday),
            WeekPolicy::MondayWeeks => first_weekday_week(day_of_year, (weekday + 6) % 7),
        }
    }
}

/// Seven day blocks from 1 January, plus one while the weekday hasn't passed the reference
/// weekday.
///
/// The reference is the weekday of 0 January, i.e. 31 December of the previous year, so a year
/// starting on a Monday begins in week 1.
fn day_of_year_week(day_of_year: u32, weekday: u32) -> u8 {
    // Weekday of 1 January, found by stepping back through the year
    let new_year = (weekday + 7 - (day_of_year - 1) % 7) % 7;
    let reference = (new_year + 6) % 7;

    let mut week = (day_of_year + 6) / 7;
    if weekday <= reference {
        week += 1;
    }

    week.clamp(1, 53) as u8
}

/// Number of week starts (weekday 0) since 1 January
fn first_weekday_week(day_of_year: u32, weekday: u32) -> u8 {
    ((day_of_year - 1 + 7 - weekday) / 7) as u8
}

/// The `WW-n` text shown on the face
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekLabel(String<LABEL_CAPACITY>);

impl WeekLabel {
    /// An empty label
    pub const fn blank() -> Self {
        Self(String::new())
    }

    /// Label for `date`, or a blank label when the date is unknown
    pub fn for_date(policy: WeekPolicy, date: Option<NaiveDate>) -> Self {
        let mut label = Self::blank();
        label.update(policy, date);
        label
    }

    /// Rewrite the label in place
    pub fn update(&mut self, policy: WeekPolicy, date: Option<NaiveDate>) {
        self.0.clear();

        let Some(date) = date else {
            return;
        };

        // "WW-" and two digits always fit the buffer
        if write!(self.0, "WW-{}", policy.week_number(date)).is_err() {
            self.0.clear();
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
