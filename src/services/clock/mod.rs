// Clock readout
// Hand rotation and digital labels for the centre of the dial

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::models::dial::{DialAngle, HalfPass};
use crate::models::layout::ClockReadout;

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "sun",
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
    }
}

pub fn read_clock(now: NaiveDateTime, display_24_hour_time: bool) -> ClockReadout {
    let hour = now.hour();
    let shown_hour = if display_24_hour_time {
        hour
    } else {
        match hour % 12 {
            0 => 12,
            h => h,
        }
    };

    let meridiem = if display_24_hour_time {
        String::new()
    } else {
        HalfPass::of_hour(hour).label().to_string()
    };

    ClockReadout {
        hand_rotation_deg: DialAngle::of(hour, now.minute()).degrees(),
        time_label: format!("{}:{:02}", shown_hour, now.minute()),
        meridiem,
        day_label: format!("{} {}", weekday_name(now.weekday()), now.day()),
    }
}
