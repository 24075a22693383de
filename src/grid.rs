//! Grid math: HH:MM time strings to row coordinates on the week grid and
//! back. A row is a real-valued coordinate counting hours since the grid's
//! start hour, with minutes truncated to the half-hour.

use chrono::{NaiveTime, Timelike};

/// First rendered hour of a day column.
pub const GRID_START_HOUR: u32 = 7;

/// Rendered window in whole hours: 07:00 up to, not including, 22:00.
pub const GRID_HOURS: u32 = 15;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Row coordinate of a time string, or `None` when the string is not a
/// well-formed `HH:MM`. Minutes snap down to the half-hour grid: `09:00`
/// is row 2.0, `09:29` is row 2.0, `09:30` is row 2.5.
pub fn time_to_row(time: &str) -> Option<f32> {
    let t = parse_time(time)?;
    let half = if t.minute() >= 30 { 0.5 } else { 0.0 };
    Some(t.hour() as f32 - GRID_START_HOUR as f32 + half)
}

/// Label for a row coordinate, the inverse of [`time_to_row`].
/// The whole part maps back to an hour of day, wrapped non-negative mod 24;
/// any fractional part renders as `:30`, so the format is lossy and always
/// rounds down to the half-hour grid.
pub fn format_row(row: f32) -> String {
    let hour = (row.floor() as i32 + GRID_START_HOUR as i32).rem_euclid(24);
    let minute = if row - row.floor() > 0.0 { 30 } else { 0 };
    format!("{:02}:{:02}", hour, minute)
}

/// Time labels down the left edge of the grid, top to bottom. Dense mode
/// doubles the density to half-hour steps; stored events are unaffected.
pub fn row_labels(dense: bool) -> Vec<String> {
    let steps = if dense { GRID_HOURS * 2 } else { GRID_HOURS };
    let stride = if dense { 0.5 } else { 1.0 };
    (0..steps).map(|i| format_row(i as f32 * stride)).collect()
}
