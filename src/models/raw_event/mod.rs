// Raw event module
// Calendar entries exactly as a calendar source returns them

use serde::{Deserialize, Serialize};

/// One end of a raw event. All-day entries carry `date`, timed entries
/// carry `dateTime` (possibly with a UTC offset suffix).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEventTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
}

impl RawEventTime {
    pub fn all_day(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            date_time: None,
        }
    }

    pub fn timed(date_time: impl Into<String>) -> Self {
        Self {
            date: None,
            date_time: Some(date_time.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub start: Option<RawEventTime>,
    #[serde(default)]
    pub end: Option<RawEventTime>,
}

impl RawEvent {
    pub fn new(summary: impl Into<String>, start: RawEventTime, end: RawEventTime) -> Self {
        Self {
            summary: summary.into(),
            start: Some(start),
            end: Some(end),
        }
    }
}
