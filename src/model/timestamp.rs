//! Calendar-free date/time value
//!
//! Components are stored exactly as entered. Duration math linearizes them
//! with fixed units (30-day months, 365-day years), so the minute counts are
//! an approximation and not real elapsed time.

use std::fmt;

use serde::Serialize;

/// Minutes in a pseudo-year (365 days)
pub const MINUTES_PER_YEAR: i64 = 525_600;
/// Minutes in a pseudo-month (30 days)
pub const MINUTES_PER_MONTH: i64 = 43_200;
/// Minutes in a day
pub const MINUTES_PER_DAY: i64 = 1_440;
/// Minutes in an hour
pub const MINUTES_PER_HOUR: i64 = 60;

/// A date and time of day with minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Timestamp {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
}

impl Timestamp {
    /// Sentinel for "not yet ended" (year 0)
    pub const UNSET: Timestamp = Timestamp {
        year: 0,
        month: 0,
        day: 0,
        hour: 0,
        minute: 0,
    };

    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// False for the sentinel (any value with year 0)
    pub fn is_set(&self) -> bool {
        self.year != 0
    }

    /// Fixed-unit minute count used for all report durations
    pub fn linear_minutes(&self) -> i64 {
        i64::from(self.year) * MINUTES_PER_YEAR
            + i64::from(self.month) * MINUTES_PER_MONTH
            + i64::from(self.day) * MINUTES_PER_DAY
            + i64::from(self.hour) * MINUTES_PER_HOUR
            + i64::from(self.minute)
    }

    /// Linearized minutes from `self` to `end` (negative if `end` is earlier)
    pub fn minutes_until(&self, end: &Timestamp) -> i64 {
        end.linear_minutes() - self.linear_minutes()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_set() {
            return f.pad("-");
        }
        let text = format!(
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        );
        f.pad(&text)
    }
}
