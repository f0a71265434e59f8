//! Busiest-interval computation over one day of arrival/departure events.
//!
//! A sweep-line walks the events in time order keeping a running occupancy
//! counter. Departures sort before arrivals at the same minute, so a vehicle
//! leaving frees its slot before a vehicle arriving that minute is counted.
//! Vehicles still present at the end of a day are carried into the next day
//! as synthetic arrivals at 00:00.

use chrono::NaiveDate;
use serde::Serialize;

use crate::event::{Day, Event, EventKind, LAST_MINUTE};

/// A closed interval of minutes during which the maximum occupancy held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub start: u32,
    pub end: u32,
}

/// Peak occupancy for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OccupancyResult {
    pub max_occupancy: u32,
    /// Present only when `max_occupancy > 1`.
    pub window: Option<Window>,
}

impl OccupancyResult {
    /// True when at least two vehicles were parked at the same time.
    pub fn has_overlap(&self) -> bool {
        self.window.is_some()
    }
}

/// The outcome of analyzing one day in a sequence of days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReport {
    pub date: Option<NaiveDate>,
    /// Vehicles already parked at 00:00.
    pub carry_in: u32,
    pub result: OccupancyResult,
    /// Vehicles still parked at the end of the day.
    pub carry_out: u32,
}

/// Compute the maximum occupancy of one day and the window in which it held.
///
/// `carry_in` vehicles are treated as arriving at 00:00. Returns the result
/// together with the number of vehicles still parked after the last event,
/// which seeds the next day's `carry_in`.
///
/// When several disjoint intervals reach the maximum, the last one is
/// reported. A maximum that is never followed by a departure runs until 23:59.
pub fn compute(events: &[Event], carry_in: u32) -> (OccupancyResult, u32) {
    let mut sweep: Vec<Event> = Vec::with_capacity(events.len() + carry_in as usize);
    sweep.extend((0..carry_in).map(|_| Event::arrival(0)));
    sweep.extend_from_slice(events);
    sweep.sort_by_key(Event::sweep_key);

    let (max_occupancy, final_count) = peak_occupancy(&sweep);

    let carry_out = if final_count < 0 {
        tracing::warn!(
            final_count,
            "more departures than arrivals; carrying zero vehicles forward"
        );
        0
    } else {
        final_count as u32
    };

    let window = (max_occupancy > 1).then(|| recover_window(&sweep, max_occupancy));

    (
        OccupancyResult {
            max_occupancy,
            window,
        },
        carry_out,
    )
}

/// Analyze a single undated day with nothing carried in.
pub fn analyze_day(events: &[Event]) -> DayReport {
    let (result, carry_out) = compute(events, 0);
    DayReport {
        date: None,
        carry_in: 0,
        result,
        carry_out,
    }
}

/// Analyze consecutive days, threading each day's `carry_out` into the next
/// day's `carry_in`. The first day starts with an empty lot.
pub fn analyze_days(days: &[Day]) -> Vec<DayReport> {
    let mut carry = 0;
    days.iter()
        .map(|day| {
            let carry_in = carry;
            let (result, carry_out) = compute(&day.events, carry_in);
            tracing::debug!(
                date = ?day.date,
                events = day.events.len(),
                carry_in,
                max_occupancy = result.max_occupancy,
                carry_out,
                "analyzed day"
            );
            carry = carry_out;
            DayReport {
                date: day.date,
                carry_in,
                result,
                carry_out,
            }
        })
        .collect()
}

/// Walk sorted events and return (max occupancy sampled after arrivals, final count).
fn peak_occupancy(sorted: &[Event]) -> (u32, i64) {
    let mut count: i64 = 0;
    let mut max: i64 = 0;
    for event in sorted {
        match event.kind {
            EventKind::Arrival => {
                count += 1;
                max = max.max(count);
            }
            EventKind::Departure => count -= 1,
        }
    }
    (max as u32, count)
}

/// Find the last interval during which occupancy equals `max`.
///
/// `sorted` must be in sweep order and `max` must come from `peak_occupancy`.
fn recover_window(sorted: &[Event], max: u32) -> Window {
    let max = i64::from(max);
    let mut count: i64 = 0;
    let mut start: Option<u32> = None;
    let mut end: Option<u32> = None;

    for event in sorted {
        match event.kind {
            EventKind::Arrival => {
                count += 1;
                if count == max {
                    match (start, end) {
                        (None, _) => start = Some(event.time),
                        // A later peak replaces the previous one.
                        (Some(_), Some(e)) if event.time > e => {
                            start = Some(event.time);
                            end = None;
                        }
                        // Peak resumes at the minute it ended: same interval.
                        (Some(_), Some(_)) => end = None,
                        (Some(_), None) => {}
                    }
                }
            }
            EventKind::Departure => {
                if count == max {
                    end = Some(event.time);
                }
                count -= 1;
            }
        }
    }

    Window {
        start: start.unwrap_or(0),
        end: end.unwrap_or(LAST_MINUTE),
    }
}
