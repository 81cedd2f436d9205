// Test fixtures - reusable test data
// Provides consistent activities and clock readings across test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use dailygrapher::models::activity::{Activity, ActivityMoment};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2024
    pub fn day_one() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Returns Jan 2, 2024
    pub fn day_two() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    /// Returns Dec 31, 2023
    pub fn yesterday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
    }

    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        date.and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample activities for testing
pub mod activities {
    use super::*;

    pub fn moment(date: NaiveDate, hour: u32, minute: u32) -> ActivityMoment {
        ActivityMoment::new(date, NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
    }

    /// Timed activity on a single day
    pub fn same_day(
        summary: &str,
        date: NaiveDate,
        start: (u32, u32),
        end: (u32, u32),
    ) -> Activity {
        Activity::new(
            summary,
            moment(date, start.0, start.1),
            moment(date, end.0, end.1),
        )
    }

    /// 22:00 on day one until 02:00 on day two
    pub fn night_shift() -> Activity {
        Activity::new(
            "Night shift",
            moment(dates::day_one(), 22, 0),
            moment(dates::day_two(), 2, 0),
        )
    }

    pub fn holiday() -> Activity {
        Activity::all_day("Holiday", dates::day_one(), dates::day_two())
    }
}
