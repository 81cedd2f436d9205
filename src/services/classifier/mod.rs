// Activity state classifier
// Derives per-activity flags from the current time

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::models::activity::Activity;
use crate::models::dial::HalfPass;

const NOON_MINUTE: u32 = 12 * 60;

/// Logical state of one activity at one instant.
///
/// All comparisons are strict, so an activity is neither active at its exact
/// start second nor passed at its exact end second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityState {
    pub half: HalfPass,
    pub ends_on_future_date: bool,
    pub is_full_day: bool,
    pub is_passed: bool,
    pub is_active: bool,
    pub is_hidden: bool,
    /// The arc runs on past midnight into tomorrow.
    pub continues_before: bool,
    /// The arc starts in the AM half and runs on into the PM half.
    pub continues_after_midday: bool,
}

pub fn classify(activity: &Activity, now: NaiveDateTime, today: NaiveDate) -> ActivityState {
    let now_second = now.time().num_seconds_from_midnight();
    let half = HalfPass::of_hour(now.hour());

    let ends_on_future_date = activity.end.date > today;
    let is_full_day = activity.is_full_day();
    let is_passed = activity.end.date == today && now_second > activity.end.second_of_day();
    let is_active = !is_full_day
        && now_second > activity.start.second_of_day()
        && (now_second < activity.end.second_of_day() || ends_on_future_date);

    let is_hidden = match half {
        HalfPass::Am => activity.start.hour() > 12,
        HalfPass::Pm => activity.end.hour() < 12 && !ends_on_future_date,
    };

    let continues_after_midday = !is_full_day
        && activity.start.minute_of_day() < NOON_MINUTE
        && activity.end.minute_of_day() > NOON_MINUTE;

    ActivityState {
        half,
        ends_on_future_date,
        is_full_day,
        is_passed,
        is_active,
        is_hidden,
        continues_before: ends_on_future_date,
        continues_after_midday,
    }
}
