// Property-based tests for dial geometry and activity classification

mod fixtures;

use chrono::NaiveTime;
use dailygrapher::models::activity::{Activity, ActivityMoment, ALL_DAY_END, ALL_DAY_START};
use dailygrapher::models::dial::{DialAngle, HalfPass};
use dailygrapher::services::classifier::classify;
use dailygrapher::services::dial::{arc_percent, clamp_percent, start_rotation};
use fixtures::dates::{day_one, day_two};
use proptest::prelude::*;

fn half_pass() -> impl Strategy<Value = HalfPass> {
    prop_oneof![Just(HalfPass::Am), Just(HalfPass::Pm)]
}

proptest! {
    /// Property: the dial repeats every twelve hours
    #[test]
    fn prop_angle_is_twelve_hour_periodic(hour in 0..12u32, minute in 0..60u32) {
        prop_assert_eq!(DialAngle::of(hour, minute), DialAngle::of(hour + 12, minute));
    }

    /// Property: every time of day lands inside one turn
    #[test]
    fn prop_angle_within_turn(hour in 0..24u32, minute in 0..60u32) {
        let degrees = DialAngle::of(hour, minute).degrees();
        prop_assert!((0.0..360.0).contains(&degrees));
    }

    /// Property: clamped arc percentages always fit the dial
    #[test]
    fn prop_arc_percent_clamped(
        start_hour in 0..24u32,
        start_minute in 0..60u32,
        end_hour in 0..24u32,
        end_minute in 0..60u32,
        half in half_pass(),
        future in any::<bool>(),
    ) {
        let percent = arc_percent(
            DialAngle::of(start_hour, start_minute),
            DialAngle::of(end_hour, end_minute),
            half,
            future,
        );
        let clamped = clamp_percent(percent);
        prop_assert!((0.0..=100.0).contains(&clamped));
    }

    /// Property: rotation is either the start angle or the dial origin
    #[test]
    fn prop_rotation_is_start_or_origin(
        start_hour in 0..24u32,
        end_hour in 0..24u32,
        half in half_pass(),
        future in any::<bool>(),
    ) {
        let start = DialAngle::of(start_hour, 0);
        let rotation = start_rotation(start, DialAngle::of(end_hour, 0), half, future);
        prop_assert!(rotation == start || rotation == DialAngle::ORIGIN);
    }

    /// Property: classification has no hidden state
    #[test]
    fn prop_classify_is_idempotent(
        start_hour in 0..24u32,
        end_hour in 0..24u32,
        now_hour in 0..24u32,
        now_minute in 0..60u32,
        ends_tomorrow in any::<bool>(),
    ) {
        let end_date = if ends_tomorrow { day_two() } else { day_one() };
        let activity = Activity::new(
            "Probe",
            ActivityMoment::new(day_one(), NaiveTime::from_hms_opt(start_hour, 0, 0).unwrap()),
            ActivityMoment::new(end_date, NaiveTime::from_hms_opt(end_hour, 30, 0).unwrap()),
        );
        let now = day_one().and_hms_opt(now_hour, now_minute, 0).unwrap();

        let first = classify(&activity, now, day_one());
        prop_assert_eq!(first, classify(&activity, now, day_one()));
        prop_assert!(!(first.is_full_day && first.is_active));
    }

    /// Property: breaking any one full-day condition makes an activity timed
    #[test]
    fn prop_full_day_conditions(
        which in 0..3usize,
        seconds in 1..86_399u32,
    ) {
        let mut activity = Activity::all_day("Holiday", day_one(), day_two());
        prop_assert!(activity.is_full_day());

        let shifted = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap();
        match which {
            0 => activity.end.date = day_one(),
            1 => activity.start.time = if shifted == ALL_DAY_START { NaiveTime::from_hms_opt(1, 0, 0).unwrap() } else { shifted },
            _ => activity.end.time = if shifted == ALL_DAY_END { NaiveTime::from_hms_opt(1, 0, 0).unwrap() } else { shifted },
        }
        prop_assert!(!activity.is_full_day());
    }
}
