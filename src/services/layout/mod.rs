// Layout composer
// Combines dial geometry and activity state into render descriptors

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::activity::Activity;
use crate::models::dial::DialAngle;
use crate::models::layout::{ArcStyle, FullDayBanner, Layout, RenderDescriptor};
use crate::services::classifier::{classify, ActivityState};
use crate::services::dial::{arc_percent, clamp_percent, start_rotation};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    pub hide_full_day_events: bool,
}

/// Lay out every activity for one render pass.
///
/// Pure and stateless: the same activities, time and date always produce
/// the same layout.
pub fn compose(
    activities: &[Activity],
    now: NaiveDateTime,
    today: NaiveDate,
    options: LayoutOptions,
) -> Layout {
    let mut layout = Layout::default();

    for (index, activity) in activities.iter().enumerate() {
        let state = classify(activity, now, today);
        if state.is_full_day {
            if !options.hide_full_day_events {
                layout.banners.push(FullDayBanner {
                    summary: activity.summary.clone(),
                });
            }
            continue;
        }

        layout.arcs.push(describe(index, activity, &state));
    }

    layout
}

fn describe(index: usize, activity: &Activity, state: &ActivityState) -> RenderDescriptor {
    let start = DialAngle::of_time(activity.start.time);
    let end = DialAngle::of_time(activity.end.time);

    let percent = arc_percent(start, end, state.half, state.ends_on_future_date);
    let rotation = start_rotation(start, end, state.half, state.ends_on_future_date);

    let mut descriptor = RenderDescriptor {
        index,
        summary: activity.summary.clone(),
        rotation_deg: rotation.degrees(),
        arc_percent: clamp_percent(percent),
        start_angle: start,
        half: state.half,
        is_active: state.is_active,
        is_passed: state.is_passed,
        is_hidden: state.is_hidden,
        continues_before: state.continues_before,
        continues_after_midday: state.continues_after_midday,
        before_marker_deg: None,
        midday_marker_deg: None,
        flip_label: false,
        duration_label: duration_label(activity),
        style: ArcStyle::resolve(state.is_active, state.is_passed, index),
    };
    descriptor.place_decorations();
    descriptor
}

/// Compact duration such as `1h30m`, `2h` or `45m`.
///
/// Hours are taken modulo twelve, matching the single pass of the dial the
/// arc is drawn on. Minutes are wrapped independently of the hours.
pub fn duration_label(activity: &Activity) -> String {
    let hours = (activity.end.hour() + 24 - activity.start.hour()) % 12;
    let minutes = (activity.end.minute() + 60 - activity.start.minute()) % 60;

    let mut label = String::new();
    if hours > 0 {
        label.push_str(&format!("{hours}h"));
    }
    if minutes > 0 {
        label.push_str(&format!("{minutes}m"));
    }
    label
}
