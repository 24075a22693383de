//! Sort and layout projection for the week grid and the print renderer.
//! Columns do not stack overlapping events; two events sharing a slot
//! render as overlapping blocks.

use crate::grid::time_to_row;
use crate::models::event::Event;

/// Default pixel height of one grid row.
pub const ROW_HEIGHT: f32 = 48.0;

/// Density multiplier for the dense-hours toggle: 1 for hourly rows,
/// 2 for half-hourly.
pub fn density(dense_hours: bool) -> u32 {
    if dense_hours { 2 } else { 1 }
}

/// Stable ordering for rendering: weekday column first, then start-time
/// row. Equal keys keep their insertion order, so two events truncating to
/// the same half-hour stay in the order they were added.
pub fn sort_events(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| {
        a.day.index().cmp(&b.day.index()).then_with(|| {
            let ra = time_to_row(&a.start).unwrap_or(0.0);
            let rb = time_to_row(&b.start).unwrap_or(0.0);
            ra.total_cmp(&rb)
        })
    });
    sorted
}

/// Events partitioned into the seven day columns, sorted within each.
pub fn day_columns(events: &[Event]) -> [Vec<Event>; 7] {
    let mut columns: [Vec<Event>; 7] = Default::default();
    for ev in sort_events(events) {
        columns[ev.day.index()].push(ev);
    }
    columns
}

/// Absolute position of an event block inside its day column, in pixels
/// from the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventBlock {
    pub offset: f32,
    pub height: f32,
}

/// Geometry for one event given the row height and the density multiplier.
/// `None` when either endpoint fails to parse; such events are left out of
/// the projection (they cannot enter the store through a save, only
/// through a hand-built replace-all).
pub fn event_block(event: &Event, row_height: f32, density: u32) -> Option<EventBlock> {
    let start = time_to_row(&event.start)?;
    let end = time_to_row(&event.end)?;
    let scale = row_height * density as f32;
    Some(EventBlock {
        offset: start * scale,
        height: (end - start) * scale,
    })
}
