//! Pre-save validation. Only the blocking checks live here; overlap is
//! advisory and handled separately by the overlap module.

use crate::errors::{AppError, AppResult};
use crate::grid::parse_time;
use crate::models::event::Event;

/// Validate a candidate event before it is committed to the store.
///
/// Checks run in order: trimmed non-empty title, well-formed `HH:MM` on
/// both endpoints, then `start < end`. Zero-padded `HH:MM` strings order
/// lexicographically the same as chronologically, so the range check is a
/// plain string compare.
pub fn validate_event(candidate: &Event) -> AppResult<()> {
    if candidate.title.trim().is_empty() {
        return Err(AppError::MissingTitle);
    }
    for t in [&candidate.start, &candidate.end] {
        if parse_time(t).is_none() {
            return Err(AppError::InvalidTime(t.clone()));
        }
    }
    if candidate.start >= candidate.end {
        return Err(AppError::InvalidTimeRange {
            start: candidate.start.clone(),
            end: candidate.end.clone(),
        });
    }
    Ok(())
}
