//! Typed arrival/departure events and day groups.

use chrono::NaiveDate;

/// Minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// The last representable minute of a day (23:59).
pub const LAST_MINUTE: u32 = MINUTES_PER_DAY - 1;

/// Whether a vehicle entered or left the lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Arrival,
    Departure,
}

/// A single arrival or departure at a minute of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    /// Minutes since midnight, `0..=LAST_MINUTE`.
    pub time: u32,
    pub kind: EventKind,
}

impl Event {
    /// Build an event, returning `None` if `time` is past 23:59.
    pub fn try_new(time: u32, kind: EventKind) -> Option<Self> {
        (time <= LAST_MINUTE).then_some(Self { time, kind })
    }

    /// Arrival at `time`, clamped to 23:59.
    pub fn arrival(time: u32) -> Self {
        Self {
            time: time.min(LAST_MINUTE),
            kind: EventKind::Arrival,
        }
    }

    /// Departure at `time`, clamped to 23:59.
    pub fn departure(time: u32) -> Self {
        Self {
            time: time.min(LAST_MINUTE),
            kind: EventKind::Departure,
        }
    }

    pub fn is_arrival(&self) -> bool {
        self.kind == EventKind::Arrival
    }

    /// Sort key: ascending time, departures before arrivals at the same minute.
    pub(crate) fn sweep_key(&self) -> (u32, u8) {
        let rank = match self.kind {
            EventKind::Departure => 0,
            EventKind::Arrival => 1,
        };
        (self.time, rank)
    }
}

/// An event tagged with the calendar date it happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatedEvent {
    pub date: NaiveDate,
    pub event: Event,
}

/// The events of one day of lot activity.
///
/// `date` is `None` for single-day input, which carries no calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Day {
    pub date: Option<NaiveDate>,
    pub events: Vec<Event>,
}

impl Day {
    pub fn undated(events: Vec<Event>) -> Self {
        Self { date: None, events }
    }

    pub fn dated(date: NaiveDate, events: Vec<Event>) -> Self {
        Self {
            date: Some(date),
            events,
        }
    }
}
