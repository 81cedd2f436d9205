// Event normalizer
// Turns raw calendar entries into activities with separate date and time

use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;
use thiserror::Error;

use crate::models::activity::{Activity, ActivityMoment, ALL_DAY_END, ALL_DAY_START};
use crate::models::raw_event::{RawEvent, RawEventTime};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventShapeError {
    #[error("malformed event record: {0}")]
    Malformed(String),
    #[error("event has no start")]
    MissingStart,
    #[error("event has no end")]
    MissingEnd,
    #[error("event boundary has neither a date nor a dateTime")]
    EmptyBoundary,
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("invalid time: {0}")]
    InvalidTime(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Start,
    End,
}

impl Boundary {
    fn all_day_time(self) -> NaiveTime {
        match self {
            Boundary::Start => ALL_DAY_START,
            Boundary::End => ALL_DAY_END,
        }
    }
}

pub fn normalize(event: &RawEvent) -> Result<Activity, EventShapeError> {
    let start = event.start.as_ref().ok_or(EventShapeError::MissingStart)?;
    let end = event.end.as_ref().ok_or(EventShapeError::MissingEnd)?;

    Ok(Activity::new(
        event.summary.clone(),
        normalize_boundary(start, Boundary::Start)?,
        normalize_boundary(end, Boundary::End)?,
    ))
}

/// Normalize a batch, skipping malformed records.
pub fn normalize_all(events: &[RawEvent]) -> Vec<Activity> {
    events
        .iter()
        .filter_map(|event| match normalize(event) {
            Ok(activity) => Some(activity),
            Err(err) => {
                log::warn!("Skipping calendar event {:?}: {}", event.summary, err);
                None
            }
        })
        .collect()
}

/// Decode raw event records one by one. A record with the wrong JSON shape
/// is skipped without affecting the rest of the calendar.
pub fn decode_events(records: Vec<Value>) -> Vec<RawEvent> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(position, record)| match decode_event(record) {
            Ok(event) => Some(event),
            Err(err) => {
                log::warn!("Skipping calendar event at position {}: {}", position, err);
                None
            }
        })
        .collect()
}

pub fn decode_event(record: Value) -> Result<RawEvent, EventShapeError> {
    serde_json::from_value(record).map_err(|err| EventShapeError::Malformed(err.to_string()))
}

fn normalize_boundary(
    raw: &RawEventTime,
    boundary: Boundary,
) -> Result<ActivityMoment, EventShapeError> {
    let timed = raw
        .date_time
        .as_deref()
        .map(split_date_time)
        .transpose()?;

    let date = match (raw.date.as_deref(), timed) {
        (Some(date), _) => parse_date(date)?,
        (None, Some((date, _))) => date,
        (None, None) => return Err(EventShapeError::EmptyBoundary),
    };

    let time = timed
        .map(|(_, time)| time)
        .unwrap_or_else(|| boundary.all_day_time());

    Ok(ActivityMoment::new(date, time))
}

fn split_date_time(value: &str) -> Result<(NaiveDate, NaiveTime), EventShapeError> {
    let (date, time) = value
        .trim()
        .split_once('T')
        .ok_or_else(|| EventShapeError::InvalidTime(value.to_string()))?;

    Ok((parse_date(date)?, parse_wall_time(time)?))
}

fn parse_date(value: &str) -> Result<NaiveDate, EventShapeError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| EventShapeError::InvalidDate(value.to_string()))
}

/// Parse the wall-clock part of a timestamp, dropping any offset suffix
/// (`Z`, `+HH:MM`, `-HH:MM`) and fractional seconds.
fn parse_wall_time(value: &str) -> Result<NaiveTime, EventShapeError> {
    let wall = value
        .find(['Z', 'z', '+', '-'])
        .map_or(value, |offset| &value[..offset]);
    let wall = wall.split_once('.').map_or(wall, |(whole, _)| whole);

    NaiveTime::parse_from_str(wall, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(wall, "%H:%M"))
        .map_err(|_| EventShapeError::InvalidTime(value.to_string()))
}
