//! Turn raw input into typed events.
//!
//! Two input shapes are supported:
//!
//! - a JSON array of visit records spanning any number of days:
//!   `[{"Id": 0, "ArrivalTime": "2016-05-01T06:36:00", "LeaveTime": "2016-05-01T13:28:00"}]`
//! - a single day as plain text, one vehicle per line: `06:36 13:28`

use std::io;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike};
use serde::Deserialize;

use crate::error::{LotError, Result};
use crate::event::{DatedEvent, Event};

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// One vehicle visit from the multi-day JSON log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingRecord {
    pub id: Option<u64>,
    pub arrival: NaiveDateTime,
    pub leave: NaiveDateTime,
}

/// Wire shape of a record. Timestamps stay optional so that an absent field
/// is reported by name instead of as a generic JSON error.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawRecord {
    id: Option<u64>,
    arrival_time: Option<String>,
    leave_time: Option<String>,
}

/// Read an input file, rejecting missing and blank files.
pub fn read_input(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LotError::InputNotFound(path.to_path_buf()),
        _ => LotError::Io(e),
    })?;
    if content.trim().is_empty() {
        return Err(LotError::EmptyInput);
    }
    Ok(content)
}

/// Parse a JSON array of parking records.
///
/// # Errors
/// - `LotError::Json` if the document is not an array of objects.
/// - `LotError::MissingField` if a record lacks `ArrivalTime` or `LeaveTime`.
/// - `LotError::Parse` if a timestamp is not an ISO-8601 date-time. A `Z` or
///   `+HH:MM` suffix is accepted and ignored: times are read as local wall clock.
/// - `LotError::EmptyInput` if the array has no records.
pub fn parse_json_records(json: &str) -> Result<Vec<ParkingRecord>> {
    let raw: Vec<RawRecord> = serde_json::from_str(json)?;
    if raw.is_empty() {
        return Err(LotError::EmptyInput);
    }

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            let arrival = required_timestamp(record.arrival_time, "ArrivalTime", index)?;
            let leave = required_timestamp(record.leave_time, "LeaveTime", index)?;
            Ok(ParkingRecord {
                id: record.id,
                arrival,
                leave,
            })
        })
        .collect()
}

fn required_timestamp(value: Option<String>, field: &str, index: usize) -> Result<NaiveDateTime> {
    let value = value.ok_or_else(|| LotError::MissingField {
        line: None,
        field: format!("{} in record {}", field, index),
    })?;
    parse_timestamp(&value).ok_or_else(|| LotError::Parse {
        line: None,
        message: format!("record {}: invalid {} '{}'", index, field, value),
    })
}

/// Local date-time formats first, then RFC 3339 with its offset dropped.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.naive_local()))
}

/// Split each record into an arrival on its arrival date and a departure on
/// its leave date. Seconds are dropped.
pub fn records_to_events(records: &[ParkingRecord]) -> Vec<DatedEvent> {
    records
        .iter()
        .flat_map(|r| {
            [
                DatedEvent {
                    date: r.arrival.date(),
                    event: Event::arrival(minute_of_day(r.arrival.time())),
                },
                DatedEvent {
                    date: r.leave.date(),
                    event: Event::departure(minute_of_day(r.leave.time())),
                },
            ]
        })
        .collect()
}

/// Parse single-day `HH:MM HH:MM` lines into arrival and departure events.
///
/// Blank lines are skipped. Line numbers in errors are 1-based.
pub fn parse_time_pairs(text: &str) -> Result<Vec<Event>> {
    let mut events = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [_] => {
                return Err(LotError::MissingField {
                    line: Some(line_no),
                    field: "departure time".to_string(),
                })
            }
            [arrive, leave] => {
                events.push(Event::arrival(clock_at(arrive, line_no)?));
                events.push(Event::departure(clock_at(leave, line_no)?));
            }
            more => {
                return Err(LotError::Parse {
                    line: Some(line_no),
                    message: format!("expected two times, found {} fields", more.len()),
                })
            }
        }
    }

    if events.is_empty() {
        return Err(LotError::EmptyInput);
    }
    tracing::debug!(vehicles = events.len() / 2, "parsed single-day input");
    Ok(events)
}

fn clock_at(token: &str, line: usize) -> Result<u32> {
    parse_clock(token).map_err(|e| match e {
        LotError::Parse { message, .. } => LotError::Parse {
            line: Some(line),
            message,
        },
        other => other,
    })
}

/// Parse an `HH:MM` clock time into minutes since midnight.
pub fn parse_clock(value: &str) -> Result<u32> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map(minute_of_day)
        .map_err(|e| LotError::Parse {
            line: None,
            message: format!("invalid time '{}': {}", value, e),
        })
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
