//! Arc geometry on the shared 12-hour dial.
//!
//! The dial has one revolution of visual space but a day covers it twice,
//! once for the AM pass and once for the PM pass. An event that wraps past
//! the 12 o'clock position has to be owned by one of the two passes; the
//! [`ArcCase`] selection below is that tie-break.

use crate::models::dial::{DialAngle, HalfPass, FULL_TURN};

/// How an arc is measured on the current pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcCase {
    /// AM pass or an event running into a later date, no wrap.
    ForwardPlain,
    /// As `ForwardPlain`, but the end lies past 12 o'clock: the end is
    /// pushed one turn forward and capped at a full turn.
    ForwardWrapped,
    /// PM pass with a same-day end, no wrap.
    TrailingPlain,
    /// As `TrailingPlain`, but the start lies before 12 o'clock of this
    /// pass: the start is pulled one turn back and floored at the origin.
    TrailingWrapped,
}

impl ArcCase {
    /// Pick the case for an arc. `end` must already have midnight mapped to
    /// a full turn (see [`normalize_end`]).
    pub fn select(start: f64, end: f64, half: HalfPass, ends_on_future_date: bool) -> Self {
        let wraps = start > end;
        let forward = half.is_am() || ends_on_future_date;
        match (forward, wraps) {
            (true, false) => ArcCase::ForwardPlain,
            (true, true) => ArcCase::ForwardWrapped,
            (false, false) => ArcCase::TrailingPlain,
            (false, true) => ArcCase::TrailingWrapped,
        }
    }

    /// Effective `(start, end)` in degrees for this case.
    pub fn bounds(self, start: f64, end: f64) -> (f64, f64) {
        match self {
            ArcCase::ForwardPlain => (start, end.min(FULL_TURN)),
            ArcCase::ForwardWrapped => (start, (end + FULL_TURN).min(FULL_TURN)),
            ArcCase::TrailingPlain => (start.max(0.0), end),
            ArcCase::TrailingWrapped => ((start - FULL_TURN).max(0.0), end),
        }
    }
}

/// An end angle of exactly 0 is read as a full turn.
pub fn normalize_end(end: DialAngle) -> f64 {
    if end.degrees() == 0.0 {
        FULL_TURN
    } else {
        end.degrees()
    }
}

/// Share of a full revolution (one half-day pass) covered by an arc, in
/// percent. The raw value may leave [0, 100] for inconsistent data; use
/// [`clamp_percent`] before rendering.
pub fn arc_percent(
    start: DialAngle,
    end: DialAngle,
    half: HalfPass,
    ends_on_future_date: bool,
) -> f64 {
    let start = start.degrees();
    let end = normalize_end(end);
    let case = ArcCase::select(start, end, half, ends_on_future_date);
    let (start, end) = case.bounds(start, end);
    (end - start) / FULL_TURN * 100.0
}

pub fn clamp_percent(percent: f64) -> f64 {
    if !(0.0..=100.0).contains(&percent) {
        log::debug!("Arc percentage {percent:.3} outside the dial, clamping");
    }
    percent.clamp(0.0, 100.0)
}

/// Angle the arc is drawn from.
///
/// An event that started on the AM pass but is shown on the PM pass is
/// drawn from the dial origin. The comparison uses the raw end angle, so a
/// noon end (angle 0) counts as earlier than any start.
pub fn start_rotation(
    start: DialAngle,
    end: DialAngle,
    half: HalfPass,
    ends_on_future_date: bool,
) -> DialAngle {
    match (ends_on_future_date, half, start > end) {
        (true, _, _) => start,
        (false, HalfPass::Pm, true) => DialAngle::ORIGIN,
        (false, _, _) => start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn angle(hour: u32, minute: u32) -> DialAngle {
        DialAngle::of(hour, minute)
    }

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test_case(270.0, 300.0, HalfPass::Am, false, ArcCase::ForwardPlain)]
    #[test_case(300.0, 60.0, HalfPass::Am, false, ArcCase::ForwardWrapped)]
    #[test_case(300.0, 60.0, HalfPass::Pm, true, ArcCase::ForwardWrapped)]
    #[test_case(30.0, 90.0, HalfPass::Pm, false, ArcCase::TrailingPlain)]
    #[test_case(300.0, 60.0, HalfPass::Pm, false, ArcCase::TrailingWrapped)]
    fn test_case_selection(start: f64, end: f64, half: HalfPass, future: bool, expected: ArcCase) {
        assert_eq!(ArcCase::select(start, end, half, future), expected);
    }

    #[test]
    fn test_forward_plain() {
        // 09:00-10:30 in the morning
        approx(arc_percent(angle(9, 0), angle(10, 30), HalfPass::Am, false), 12.5);
    }

    #[test]
    fn test_forward_wrapped_is_capped_at_twelve() {
        // 10:00-14:00 seen in the morning: drawn up to 12 o'clock only
        approx(
            arc_percent(angle(10, 0), angle(14, 0), HalfPass::Am, false),
            60.0 / 360.0 * 100.0,
        );
    }

    #[test]
    fn test_trailing_wrapped_starts_at_origin() {
        // 10:00-14:00 seen in the afternoon: drawn from 12 o'clock
        approx(
            arc_percent(angle(10, 0), angle(14, 0), HalfPass::Pm, false),
            60.0 / 360.0 * 100.0,
        );
    }

    #[test]
    fn test_trailing_plain() {
        approx(arc_percent(angle(13, 0), angle(16, 0), HalfPass::Pm, false), 25.0);
    }

    #[test]
    fn test_midnight_end_wraps_to_full_turn() {
        // 22:00-00:00
        approx(
            arc_percent(angle(22, 0), angle(0, 0), HalfPass::Pm, false),
            60.0 / 360.0 * 100.0,
        );
    }

    #[test]
    fn test_overnight_event_on_future_date() {
        // 22:00 today to 02:00 tomorrow, watched in the evening
        approx(
            arc_percent(angle(22, 0), angle(2, 0), HalfPass::Pm, true),
            60.0 / 360.0 * 100.0,
        );
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(-4.0), 0.0);
        assert_eq!(clamp_percent(140.0), 100.0);
        assert_eq!(clamp_percent(42.0), 42.0);
    }

    #[test]
    fn test_start_rotation_cases() {
        let start = angle(10, 0);
        let end = angle(14, 0);
        assert_eq!(start_rotation(start, end, HalfPass::Pm, false), DialAngle::ORIGIN);
        assert_eq!(start_rotation(start, end, HalfPass::Am, false), start);
        assert_eq!(start_rotation(start, end, HalfPass::Pm, true), start);
        assert_eq!(
            start_rotation(angle(13, 0), angle(14, 0), HalfPass::Pm, false),
            angle(13, 0)
        );
    }

    #[test]
    fn test_start_rotation_noon_end_uses_raw_angle() {
        // 11:00-12:00: the raw end angle is 0, so the PM pass draws from the origin
        assert_eq!(
            start_rotation(angle(11, 0), angle(12, 0), HalfPass::Pm, false),
            DialAngle::ORIGIN
        );
    }
}
