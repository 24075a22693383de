//! Tabular codec: the CSV interchange format for the event collection.
//!
//! Export writes a fixed column order with every field quoted. Import maps
//! columns by header name so files from other tools may order them freely;
//! records always get fresh ids and are coerced field by field rather than
//! validated.

use std::collections::HashMap;
use std::sync::OnceLock;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use regex::Regex;

use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, fresh_id};
use crate::models::weekday::Weekday;
use crate::settings::default_accent_color;

/// Export column order. Import does not rely on it.
pub const COLUMNS: [&str; 7] = ["title", "day", "start", "end", "category", "color", "notes"];

/// Serialize events in iteration order (not sorted order). Every field is
/// quote-wrapped; internal quotes are doubled per RFC 4180.
pub fn write_csv(events: &[Event]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    wtr.write_record(COLUMNS)
        .map_err(|e| AppError::Export(e.to_string()))?;

    for ev in events {
        wtr.write_record([
            ev.title.as_str(),
            ev.day.as_str(),
            ev.start.as_str(),
            ev.end.as_str(),
            ev.category.as_str(),
            ev.color.as_str(),
            ev.notes.as_str(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

/// Parse CSV contents into fresh events.
///
/// The first line must be a header; fields are matched by name, case and
/// surrounding whitespace ignored. Missing columns fill with defaults and
/// unknown columns (including any external `id`) are ignored. Any
/// structural parse error aborts the whole import.
pub fn read_csv(contents: &str) -> AppResult<Vec<Event>> {
    let mut rdr = ReaderBuilder::new().from_reader(contents.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|e| AppError::ImportParse(e.to_string()))?;
    let columns = column_positions(headers);

    let mut events = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| AppError::ImportParse(e.to_string()))?;
        events.push(event_from_record(&record, &columns));
    }
    Ok(events)
}

/// Header name (normalized) to column position.
fn column_positions(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_lowercase(), idx))
        .collect()
}

/// Coerce one row into an event. Unknown day spellings fall back to Monday
/// and malformed color tokens to the accent default; both are recoverable
/// defects, not parse failures.
fn event_from_record(record: &StringRecord, columns: &HashMap<String, usize>) -> Event {
    let field = |name: &str| -> String {
        columns
            .get(name)
            .and_then(|&idx| record.get(idx))
            .unwrap_or("")
            .to_string()
    };

    let day_raw = field("day");
    let day = Weekday::from_name(&day_raw).unwrap_or_else(|| {
        log::debug!("unknown day '{day_raw}' in import, using Monday");
        Weekday::Monday
    });

    let color_raw = field("color");
    let color = if is_hex_color(&color_raw) {
        color_raw
    } else {
        log::debug!("malformed color '{color_raw}' in import, using accent default");
        default_accent_color()
    };

    Event {
        id: fresh_id(),
        title: field("title"),
        day,
        start: field("start"),
        end: field("end"),
        category: field("category"),
        color,
        notes: field("notes"),
    }
}

fn is_hex_color(s: &str) -> bool {
    static HEX_COLOR: OnceLock<Regex> = OnceLock::new();
    HEX_COLOR
        .get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("static pattern"))
        .is_match(s)
}
