//! # Wall clock
//!
//! The face reads the local wall clock through a [`TimeSource`]. The host normally pushes the
//! time with each minute tick, which [`FixedClock`] wraps; anything able to produce a
//! [`NaiveDateTime`] can stand in for it.
//!
//! Note that the wall clock uses 24 hour notation.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Errors reading the wall clock
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// No time is available, e.g. the clock hasn't been set yet
    #[error("wall clock unavailable")]
    Unavailable,

    /// The clock gave a reading that isn't a real date and time
    #[error("invalid wall clock reading")]
    Invalid,
}

/// Source of the local wall clock time
pub trait TimeSource {
    /// Returns the current local date and time
    fn now(&self) -> Result<NaiveDateTime, ClockError>;
}

/// A time source which always returns the same reading
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedClock(Option<NaiveDateTime>);

impl FixedClock {
    pub const fn new(now: NaiveDateTime) -> Self {
        Self(Some(now))
    }

    /// A clock which has no time to give
    pub const fn unavailable() -> Self {
        Self(None)
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> Result<NaiveDateTime, ClockError> {
        self.0.ok_or(ClockError::Unavailable)
    }
}

/// A broken down clock reading as delivered by a host RTC.
///
/// Fields are unchecked; [`TimeSource::now`] rejects a reading which isn't a real date and time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarTime {
    pub year: i32,
    /// month (1-12)
    pub month: u8,
    /// day of month (1-31)
    pub day: u8,
    /// hour (0-23)
    pub hour: u8,
    /// minute (0-59)
    pub minute: u8,
}

impl TimeSource for CalendarTime {
    fn now(&self) -> Result<NaiveDateTime, ClockError> {
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
            .and_then(|date| date.and_hms_opt(self.hour as u32, self.minute as u32, 0))
            .ok_or(ClockError::Invalid)
    }
}

impl<T: TimeSource> TimeSource for &T {
    fn now(&self) -> Result<NaiveDateTime, ClockError> {
        (**self).now()
    }
}

/// Hour and minute of the wall clock, always in range.
///
/// ```compile_fail
/// # use simple_analog::ClockTime;
/// let time = ClockTime { hour: 3, minute: 200 };
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    /// hour (0-23)
    hour: u8,
    /// minute (0-59)
    minute: u8,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };

    /// Returns `None` for an hour past 23 or a minute past 59
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }

        Some(Self { hour, minute })
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub fn from_time(time: &impl Timelike) -> Self {
        // chrono guarantees hour < 24 and minute < 60
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clock_time_bounds() {
        assert_eq!(ClockTime::new(23, 59), Some(ClockTime { hour: 23, minute: 59 }));
        assert_eq!(ClockTime::new(24, 0), None);
        assert_eq!(ClockTime::new(0, 60), None);
    }

    #[test]
    fn clock_time_from_chrono() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(17, 42, 31))
            .unwrap();

        assert_eq!(ClockTime::from_time(&now), ClockTime { hour: 17, minute: 42 });
    }

    #[test]
    fn fixed_clock() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .unwrap();

        assert_eq!(FixedClock::new(now).now(), Ok(now));
        assert_eq!(FixedClock::unavailable().now(), Err(ClockError::Unavailable));
    }

    #[test]
    fn calendar_time() {
        let reading = CalendarTime {
            year: 2024,
            month: 2,
            day: 29,
            hour: 23,
            minute: 59,
        };
        let expected = NaiveDate::from_ymd_opt(2024, 2, 29)
            .and_then(|d| d.and_hms_opt(23, 59, 0))
            .unwrap();

        assert_eq!(reading.now(), Ok(expected));
        assert_eq!(CalendarTime { year: 2023, ..reading }.now(), Err(ClockError::Invalid));
        assert_eq!(CalendarTime { minute: 60, ..reading }.now(), Err(ClockError::Invalid));
        assert_eq!(CalendarTime::default().now(), Err(ClockError::Invalid));
    }
}
