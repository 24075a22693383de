//! Advisory overlap detection between same-day events.
//! Overlapping commitments are a valid state for this planner; a hit is
//! reported to the caller as a warning and never blocks a save.

use crate::grid::time_to_row;
use crate::models::event::Event;

/// True iff the two half-open intervals `[start, end)` strictly intersect
/// on the same day. Events on different days never overlap, whatever their
/// times. Events whose times fail to parse report no overlap.
pub fn overlaps(a: &Event, b: &Event) -> bool {
    if a.day != b.day {
        return false;
    }
    let (Some(sa), Some(ea), Some(sb), Some(eb)) = (
        time_to_row(&a.start),
        time_to_row(&a.end),
        time_to_row(&b.start),
        time_to_row(&b.end),
    ) else {
        return false;
    };
    sa.max(sb) < ea.min(eb)
}

/// First stored event with a different id on the same day whose interval
/// intersects the candidate.
pub fn first_overlap<'a>(candidate: &Event, events: &'a [Event]) -> Option<&'a Event> {
    events
        .iter()
        .find(|other| other.id != candidate.id && overlaps(candidate, other))
}
