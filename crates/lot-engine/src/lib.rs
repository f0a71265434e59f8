//! # lot-engine
//!
//! Busiest-interval analysis for parking lot arrival/departure logs.
//!
//! Given one or more days of vehicle visits, the engine computes the maximum
//! number of simultaneously parked vehicles and the time window during which
//! that maximum held. Vehicles still parked at midnight are carried into the
//! next day's computation.
//!
//! ## Quick start
//!
//! ```rust
//! use lot_engine::{analyze_day, parse_time_pairs, render_reports};
//!
//! let events = parse_time_pairs("10:00 15:00\n10:10 15:20\n").unwrap();
//! let report = analyze_day(&events);
//! assert_eq!(report.result.max_occupancy, 2);
//! assert_eq!(
//!     render_reports(&[report]),
//!     "Maximum number of cars: 2 at 10:10-15:00.\n"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`event`] — `Event`, `Day` and minute-of-day helpers
//! - [`normalizer`] — JSON records / `HH:MM HH:MM` lines → typed events
//! - [`grouper`] — dated events → ordered `Day` groups
//! - [`busiest`] — sweep-line engine and multi-day carry-over driver
//! - [`report`] — human-readable and JSON report rendering
//! - [`error`] — Error types

pub mod busiest;
pub mod error;
pub mod event;
pub mod grouper;
pub mod normalizer;
pub mod report;

pub use busiest::{analyze_day, analyze_days, compute, DayReport, OccupancyResult, Window};
pub use error::LotError;
pub use event::{DatedEvent, Day, Event, EventKind, LAST_MINUTE};
pub use grouper::group_by_day;
pub use normalizer::{
    parse_clock, parse_json_records, parse_time_pairs, read_input, records_to_events,
    ParkingRecord,
};
pub use report::{format_minute, format_report, format_result, render_json, render_reports};
