//! Render day reports as text or JSON.

use serde::Serialize;

use crate::busiest::{DayReport, OccupancyResult};
use crate::error::Result;

/// Format minutes since midnight as zero-padded `HH:MM`.
pub fn format_minute(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Describe one day's peak occupancy. The returned text ends with a newline.
pub fn format_result(result: &OccupancyResult) -> String {
    match result.window {
        Some(window) => format!(
            "Maximum number of cars: {} at {}-{}.\n",
            result.max_occupancy,
            format_minute(window.start),
            format_minute(window.end)
        ),
        None => format!(
            "Maximum number of cars: {}\nNo overlapping intervals.\n",
            result.max_occupancy
        ),
    }
}

/// Like [`format_result`], prefixed with the date when the day has one.
pub fn format_report(report: &DayReport) -> String {
    let body = format_result(&report.result);
    match report.date {
        Some(date) => format!("Date: {}\n{}", date.format("%Y-%m-%d"), body),
        None => body,
    }
}

/// Render every report, separated by blank lines.
pub fn render_reports(reports: &[DayReport]) -> String {
    reports
        .iter()
        .map(format_report)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct JsonWindow {
    start: String,
    end: String,
}

#[derive(Serialize)]
struct JsonReport {
    date: Option<String>,
    carry_in: u32,
    max_occupancy: u32,
    window: Option<JsonWindow>,
    carry_out: u32,
}

impl From<&DayReport> for JsonReport {
    fn from(report: &DayReport) -> Self {
        Self {
            date: report.date.map(|d| d.format("%Y-%m-%d").to_string()),
            carry_in: report.carry_in,
            max_occupancy: report.result.max_occupancy,
            window: report.result.window.map(|w| JsonWindow {
                start: format_minute(w.start),
                end: format_minute(w.end),
            }),
            carry_out: report.carry_out,
        }
    }
}

/// Render reports as a pretty-printed JSON array with `HH:MM` window bounds.
pub fn render_json(reports: &[DayReport]) -> Result<String> {
    let records: Vec<JsonReport> = reports.iter().map(JsonReport::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
