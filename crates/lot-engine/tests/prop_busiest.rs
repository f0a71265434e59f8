//! Property-based tests for the busiest-interval sweep using proptest.
//!
//! These check invariants that hold for *any* day of events, not just the
//! hand-picked scenarios in `busiest_tests.rs`.

use lot_engine::busiest::compute;
use lot_engine::event::{Event, EventKind, LAST_MINUTE};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_minute() -> impl Strategy<Value = u32> {
    0u32..=LAST_MINUTE
}

/// A visit within the day: arrival at or before departure.
fn arb_visit() -> impl Strategy<Value = (u32, u32)> {
    (arb_minute(), arb_minute()).prop_map(|(x, y)| (x.min(y), x.max(y)))
}

/// Events for a day made of complete visits, plus some overnight arrivals
/// and some departures of vehicles carried in from the previous day.
fn arb_day() -> impl Strategy<Value = (Vec<Event>, u32)> {
    (
        prop::collection::vec(arb_visit(), 0..20),
        prop::collection::vec(arb_minute(), 0..5),
        0u32..5,
    )
        .prop_flat_map(|(visits, overnight, carry_in)| {
            let leaving = prop::collection::vec(arb_minute(), 0..=carry_in as usize);
            (Just(visits), Just(overnight), Just(carry_in), leaving)
        })
        .prop_map(|(visits, overnight, carry_in, leaving)| {
            let mut events = Vec::new();
            for (start, end) in visits {
                events.push(Event::arrival(start));
                events.push(Event::departure(end));
            }
            events.extend(overnight.into_iter().map(Event::arrival));
            events.extend(leaving.into_iter().map(Event::departure));
            (events, carry_in)
        })
}

// ---------------------------------------------------------------------------
// Reference
// ---------------------------------------------------------------------------

/// Occupancy once every event at or before minute `t` has been applied.
fn level_at(events: &[Event], carry_in: u32, t: u32) -> i64 {
    let arrived = events
        .iter()
        .filter(|e| e.kind == EventKind::Arrival && e.time <= t)
        .count() as i64;
    let departed = events
        .iter()
        .filter(|e| e.kind == EventKind::Departure && e.time <= t)
        .count() as i64;
    i64::from(carry_in) + arrived - departed
}

/// Occupancy after all events of each arrival minute, maximized.
fn brute_force_max(events: &[Event], carry_in: u32) -> u32 {
    let mut instants: Vec<u32> = events
        .iter()
        .filter(|e| e.kind == EventKind::Arrival)
        .map(|e| e.time)
        .collect();
    if carry_in > 0 {
        instants.push(0);
    }

    instants
        .into_iter()
        .map(|t| level_at(events, carry_in, t).max(0) as u32)
        .max()
        .unwrap_or(0)
}

/// The last run of consecutive event minutes whose occupancy equals the max.
///
/// The run ends at the next event minute (where occupancy drops), or at 23:59
/// when nothing follows it.
fn brute_force_window(events: &[Event], carry_in: u32) -> Option<(u32, u32)> {
    let max = i64::from(brute_force_max(events, carry_in));
    if max <= 1 {
        return None;
    }

    let mut minutes: Vec<u32> = events.iter().map(|e| e.time).collect();
    if carry_in > 0 {
        minutes.push(0);
    }
    minutes.sort_unstable();
    minutes.dedup();
    let levels: Vec<i64> = minutes
        .iter()
        .map(|&t| level_at(events, carry_in, t))
        .collect();

    let mut window = None;
    let mut i = 0;
    while i < minutes.len() {
        if levels[i] != max {
            i += 1;
            continue;
        }
        let mut j = i;
        while j + 1 < minutes.len() && levels[j + 1] == max {
            j += 1;
        }
        let end = minutes.get(j + 1).copied().unwrap_or(LAST_MINUTE);
        window = Some((minutes[i], end));
        i = j + 1;
    }
    window
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn max_matches_brute_force((events, carry_in) in arb_day()) {
        let (result, _) = compute(&events, carry_in);
        prop_assert_eq!(result.max_occupancy, brute_force_max(&events, carry_in));
    }

    #[test]
    fn window_is_ordered_and_present_only_on_overlap((events, carry_in) in arb_day()) {
        let (result, _) = compute(&events, carry_in);
        match result.window {
            Some(w) => {
                prop_assert!(result.max_occupancy > 1);
                prop_assert!(w.start <= w.end, "window {:?} is reversed", w);
                prop_assert!(w.end <= LAST_MINUTE);
            }
            None => prop_assert!(result.max_occupancy <= 1),
        }
    }

    #[test]
    fn window_matches_brute_force((events, carry_in) in arb_day()) {
        let (result, _) = compute(&events, carry_in);
        let window = result.window.map(|w| (w.start, w.end));
        prop_assert_eq!(window, brute_force_window(&events, carry_in));
    }

    #[test]
    fn carry_out_counts_remaining_vehicles((events, carry_in) in arb_day()) {
        let (_, carry_out) = compute(&events, carry_in);
        let arrivals = events.iter().filter(|e| e.is_arrival()).count() as i64;
        let departures = events.len() as i64 - arrivals;
        prop_assert_eq!(i64::from(carry_out), i64::from(carry_in) + arrivals - departures);
    }

    #[test]
    fn result_ignores_input_order((events, carry_in) in arb_day()) {
        let mut reversed = events.clone();
        reversed.reverse();
        prop_assert_eq!(compute(&events, carry_in), compute(&reversed, carry_in));
    }

    #[test]
    fn compute_is_deterministic((events, carry_in) in arb_day()) {
        prop_assert_eq!(compute(&events, carry_in), compute(&events, carry_in));
    }
}
