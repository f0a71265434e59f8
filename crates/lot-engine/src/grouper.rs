//! Partition dated events into ordered day groups.

use crate::event::{DatedEvent, Day};

/// Group events by calendar date.
///
/// Days come out in ascending date order; events keep their input order
/// within a day. Dates without any event produce no group.
pub fn group_by_day(mut events: Vec<DatedEvent>) -> Vec<Day> {
    // Stable, so same-date events stay in input order.
    events.sort_by_key(|e| e.date);

    let mut days: Vec<Day> = Vec::new();
    for DatedEvent { date, event } in events {
        match days.last_mut() {
            Some(day) if day.date == Some(date) => day.events.push(event),
            _ => days.push(Day::dated(date, vec![event])),
        }
    }
    days
}
