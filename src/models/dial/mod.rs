// Dial module
// Angular coordinates on the 12-hour clock face

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Degrees swept by one hour on a 12-hour dial.
pub const DEGREES_PER_HOUR: f64 = 30.0;
pub const FULL_TURN: f64 = 360.0;

/// Position on the dial in degrees: 0 is 12 o'clock, increasing clockwise.
///
/// The dial repeats every 12 hours, so 09:00 and 21:00 share an angle.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialAngle(f64);

impl DialAngle {
    pub const ORIGIN: DialAngle = DialAngle(0.0);

    pub fn of(hour: u32, minute: u32) -> Self {
        let hours = f64::from(hour % 12) / 12.0 * FULL_TURN;
        let minutes = f64::from(minute) / 60.0 * DEGREES_PER_HOUR;
        Self(hours + minutes)
    }

    pub fn of_time(time: NaiveTime) -> Self {
        Self::of(time.hour(), time.minute())
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees)
    }

    pub fn degrees(self) -> f64 {
        self.0
    }
}

/// Which of the two daily traversals of the dial is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HalfPass {
    Am,
    Pm,
}

impl HalfPass {
    pub fn of_hour(hour: u32) -> Self {
        if hour < 12 {
            HalfPass::Am
        } else {
            HalfPass::Pm
        }
    }

    pub fn of_time(time: NaiveTime) -> Self {
        Self::of_hour(time.hour())
    }

    pub fn is_am(self) -> bool {
        self == HalfPass::Am
    }

    pub fn label(self) -> &'static str {
        match self {
            HalfPass::Am => "am",
            HalfPass::Pm => "pm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 0, 0.0 ; "midnight")]
    #[test_case(3, 0, 90.0 ; "three")]
    #[test_case(9, 30, 285.0 ; "half past nine")]
    #[test_case(12, 0, 0.0 ; "noon")]
    #[test_case(18, 0, 180.0 ; "six pm")]
    #[test_case(23, 59, 359.5 ; "last minute")]
    fn test_angle_of(hour: u32, minute: u32, expected: f64) {
        assert!((DialAngle::of(hour, minute).degrees() - expected).abs() < 1e-9);
    }

    #[test_case(0, HalfPass::Am)]
    #[test_case(11, HalfPass::Am)]
    #[test_case(12, HalfPass::Pm)]
    #[test_case(23, HalfPass::Pm)]
    fn test_half_pass_of_hour(hour: u32, expected: HalfPass) {
        assert_eq!(HalfPass::of_hour(hour), expected);
    }
}
