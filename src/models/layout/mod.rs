// Layout module
// Render descriptors handed to the presentation layer each tick

use serde::{Deserialize, Serialize};

use crate::models::dial::{DialAngle, HalfPass, FULL_TURN};

/// Visual treatment of an arc. When several states apply, active wins over
/// passed and passed wins over resting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ArcStyle {
    /// Neither running nor finished. `alternate` shades every other arc.
    Resting { alternate: bool },
    Active,
    Passed,
}

impl ArcStyle {
    pub fn resolve(is_active: bool, is_passed: bool, index: usize) -> Self {
        if is_active {
            ArcStyle::Active
        } else if is_passed {
            ArcStyle::Passed
        } else {
            ArcStyle::Resting {
                alternate: index % 2 == 1,
            }
        }
    }
}

/// Arc for one timed activity on the current half-dial pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderDescriptor {
    pub index: usize,
    pub summary: String,
    pub rotation_deg: f64,
    pub arc_percent: f64,
    pub start_angle: DialAngle,
    pub half: HalfPass,
    pub is_active: bool,
    pub is_passed: bool,
    pub is_hidden: bool,
    pub continues_before: bool,
    pub continues_after_midday: bool,
    /// Rotation of the connector drawn when the arc continues past midnight.
    pub before_marker_deg: Option<f64>,
    /// Rotation of the connector drawn when the arc continues past noon.
    pub midday_marker_deg: Option<f64>,
    /// Labels starting on the right-hand side of the dial are flipped so
    /// they read outward.
    pub flip_label: bool,
    pub duration_label: String,
    pub style: ArcStyle,
}

impl RenderDescriptor {
    /// Fill in the continuation markers and label orientation from the
    /// start angle, the current pass and the continuation flags.
    pub fn place_decorations(&mut self) {
        self.before_marker_deg = self
            .continues_before
            .then(|| self.marker_rotation(HalfPass::Pm));
        self.midday_marker_deg = self
            .continues_after_midday
            .then(|| self.marker_rotation(HalfPass::Am));
        self.flip_label = self.start_angle.degrees() < 180.0;
    }

    /// Sweep of the arc in degrees.
    pub fn sweep_deg(&self) -> f64 {
        self.arc_percent / 100.0 * FULL_TURN
    }

    fn marker_rotation(&self, mirrored_on: HalfPass) -> f64 {
        if self.half == mirrored_on {
            FULL_TURN - self.start_angle.degrees()
        } else {
            0.0
        }
    }
}

/// Banner line for an activity that spans the whole day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullDayBanner {
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub arcs: Vec<RenderDescriptor>,
    pub banners: Vec<FullDayBanner>,
}

impl Layout {
    pub fn visible_arcs(&self) -> impl Iterator<Item = &RenderDescriptor> {
        self.arcs.iter().filter(|arc| !arc.is_hidden)
    }
}

/// Digital and analog reading of the current time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockReadout {
    pub hand_rotation_deg: f64,
    pub time_label: String,
    pub meridiem: String,
    pub day_label: String,
}

/// Everything the presentation layer needs for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardFrame {
    pub clock: ClockReadout,
    pub layout: Layout,
}
