// Activity module
// Normalized calendar entry placed on the dial

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Start time given to all-day entries.
pub const ALL_DAY_START: NaiveTime = match NaiveTime::from_hms_opt(0, 0, 0) {
    Some(time) => time,
    None => panic!("invalid all-day start"),
};

/// End time given to all-day entries.
pub const ALL_DAY_END: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 0) {
    Some(time) => time,
    None => panic!("invalid all-day end"),
};

/// A point in time split into its calendar date and wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityMoment {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl ActivityMoment {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Whole minutes since midnight, ignoring seconds.
    pub fn minute_of_day(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Whole seconds since midnight.
    pub fn second_of_day(&self) -> u32 {
        self.time.num_seconds_from_midnight()
    }
}

/// Calendar activity after normalization
///
/// Activities are immutable once built and are rebuilt on every data load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub summary: String,
    pub start: ActivityMoment,
    pub end: ActivityMoment,
}

impl Activity {
    pub fn new(summary: impl Into<String>, start: ActivityMoment, end: ActivityMoment) -> Self {
        Self {
            summary: summary.into(),
            start,
            end,
        }
    }

    /// Build an all-day activity covering `first_day` up to (excluding) `end_date`.
    ///
    /// # Examples
    /// ```
    /// use dailygrapher::models::activity::Activity;
    /// use chrono::NaiveDate;
    ///
    /// let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let next = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    /// assert!(Activity::all_day("Holiday", first, next).is_full_day());
    /// ```
    pub fn all_day(summary: impl Into<String>, first_day: NaiveDate, end_date: NaiveDate) -> Self {
        Self::new(
            summary,
            ActivityMoment::new(first_day, ALL_DAY_START),
            ActivityMoment::new(end_date, ALL_DAY_END),
        )
    }

    /// Full-day activities span calendar dates with both ends pinned to the
    /// day bounds. They carry no dial position.
    pub fn is_full_day(&self) -> bool {
        self.start.date < self.end.date
            && self.start.time == ALL_DAY_START
            && self.end.time == ALL_DAY_END
    }
}
