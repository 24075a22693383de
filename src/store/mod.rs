//! The planner state container: the event collection, the display
//! settings, and the persistence side effects tying them together.
//!
//! The `Planner` is the single owner of all mutable state. It hydrates
//! once from a snapshot store, mutates on collaborator calls, and enqueues
//! a write of the affected keys after every mutation.

use crate::db::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::export::csv::{read_csv, write_csv};
use crate::layout;
use crate::models::event::Event;
use crate::overlap::first_overlap;
use crate::persist::{
    self, KEY_ACCENT_COLOR, KEY_BACKGROUND_COLOR, KEY_DENSE_HOURS, KEY_EVENTS, KEY_PHOTO,
    KEY_TITLE, Persister, SnapshotStore,
};
use crate::settings::{self, DisplaySettings};
use crate::validate::validate_event;

/// Non-blocking warning attached to a successful save: the first other
/// same-day event the candidate overlaps.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapWarning {
    pub id: String,
    pub title: String,
}

/// Result of a successful save. The event is stored either way; the
/// overlap hit, if any, is handed back for the UI to show.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SaveOutcome {
    pub overlap: Option<OverlapWarning>,
}

pub struct Planner {
    events: Vec<Event>,
    settings: DisplaySettings,
    persister: Persister,
}

impl Planner {
    /// Hydrate the planner from a snapshot store, then hand the store to
    /// the background writer. Every key falls back to its own default
    /// independently, so one corrupt entry never takes the others down.
    pub fn load(store: Box<dyn SnapshotStore>) -> Self {
        let events = persist::load_or_default(store.as_ref(), KEY_EVENTS, Vec::new);
        let settings = DisplaySettings {
            title: persist::load_or_default(store.as_ref(), KEY_TITLE, settings::default_title),
            background_color: persist::load_or_default(
                store.as_ref(),
                KEY_BACKGROUND_COLOR,
                settings::default_background_color,
            ),
            accent_color: persist::load_or_default(
                store.as_ref(),
                KEY_ACCENT_COLOR,
                settings::default_accent_color,
            ),
            photo: persist::load_or_default(store.as_ref(), KEY_PHOTO, || None),
            dense_hours: persist::load_or_default(store.as_ref(), KEY_DENSE_HOURS, || false),
        };
        Self {
            events,
            settings,
            persister: Persister::spawn(store),
        }
    }

    /// Open the planner over the default on-disk snapshot database.
    pub fn open() -> AppResult<Self> {
        Ok(Self::load(Box::new(SqliteStore::open_default()?)))
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    // ------------------------------------------------
    // Store primitives
    // ------------------------------------------------

    /// Append a new event. An id already present leaves the store
    /// untouched; id uniqueness holds at all times.
    pub fn add(&mut self, event: Event) {
        if self.events.iter().any(|e| e.id == event.id) {
            log::debug!("add ignored, id {} already stored", event.id);
            return;
        }
        self.events.push(event);
        self.persist_events();
    }

    /// Replace the stored event with the same id, keeping its position so
    /// sort ties stay stable.
    pub fn update(&mut self, event: Event) -> AppResult<()> {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => {
                *slot = event;
                self.persist_events();
                Ok(())
            }
            None => Err(AppError::UnknownEvent(event.id)),
        }
    }

    /// Remove an event. An unknown id is a no-op.
    pub fn delete_event(&mut self, id: &str) {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        if self.events.len() != before {
            self.persist_events();
        }
    }

    /// Wholesale substitution, used by CSV import. The rows are trusted as
    /// already valid; neither the validator nor the overlap scan runs.
    pub fn replace_all(&mut self, events: Vec<Event>) {
        self.events = events;
        self.persist_events();
    }

    // ------------------------------------------------
    // Collaborator surface
    // ------------------------------------------------

    /// Fresh editor draft, accented with the board color. Not stored until
    /// saved.
    pub fn draft_event(&self) -> Event {
        let mut ev = Event::draft();
        ev.color = self.settings.accent_color.clone();
        ev
    }

    /// Copy of a stored event for the editor.
    pub fn edit_event(&self, id: &str) -> AppResult<Event> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| AppError::UnknownEvent(id.to_string()))
    }

    /// Validate and commit a candidate event: insert when the id is new,
    /// replace otherwise. A validation failure aborts before any mutation.
    /// Overlap with another same-day event does not block the save; it
    /// comes back as a warning in the outcome.
    pub fn save_event(&mut self, candidate: Event) -> AppResult<SaveOutcome> {
        validate_event(&candidate)?;
        let overlap = first_overlap(&candidate, &self.events).map(|hit| OverlapWarning {
            id: hit.id.clone(),
            title: hit.title.clone(),
        });
        if self.events.iter().any(|e| e.id == candidate.id) {
            self.update(candidate)?;
        } else {
            self.add(candidate);
        }
        Ok(SaveOutcome { overlap })
    }

    /// Serialize the events for the export dialog, in store order.
    pub fn export_csv(&self) -> AppResult<String> {
        write_csv(&self.events)
    }

    /// Parse CSV contents and replace the whole collection, returning how
    /// many events were imported. A parse error aborts the import and
    /// leaves the store untouched; there is no partial import.
    pub fn import_csv(&mut self, contents: &str) -> AppResult<usize> {
        let imported = read_csv(contents)?;
        let count = imported.len();
        self.replace_all(imported);
        Ok(count)
    }

    /// Replace the display settings and persist every settings key.
    pub fn set_display_settings(&mut self, settings: DisplaySettings) {
        self.settings = settings;
        self.persist_settings();
    }

    /// Toggle half-hour rows. Presentation state only; events are
    /// untouched.
    pub fn set_dense_hours(&mut self, dense: bool) {
        self.settings.dense_hours = dense;
        self.queue_json(KEY_DENSE_HOURS, &self.settings.dense_hours);
    }

    /// Sorted day columns for the grid and the print renderer.
    pub fn day_columns(&self) -> [Vec<Event>; 7] {
        layout::day_columns(&self.events)
    }

    // ------------------------------------------------
    // Persistence side effects
    // ------------------------------------------------

    fn persist_events(&self) {
        self.queue_json(KEY_EVENTS, &self.events);
    }

    fn persist_settings(&self) {
        self.queue_json(KEY_TITLE, &self.settings.title);
        self.queue_json(KEY_BACKGROUND_COLOR, &self.settings.background_color);
        self.queue_json(KEY_ACCENT_COLOR, &self.settings.accent_color);
        self.queue_json(KEY_PHOTO, &self.settings.photo);
        self.queue_json(KEY_DENSE_HOURS, &self.settings.dense_hours);
    }

    fn queue_json<T: serde::Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.persister.queue(key, json),
            Err(err) => log::debug!("snapshot encode for '{key}' dropped: {err}"),
        }
    }
}
