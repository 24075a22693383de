use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::weekday::Weekday;
use crate::settings::default_accent_color;

/// A scheduled slot in the abstract week.
///
/// `id` is the sole join key for update and delete and never changes after
/// creation. `start`/`end` are zero-padded `HH:MM` strings, so comparing
/// them lexicographically is the same as comparing them chronologically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub day: Weekday,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_accent_color")]
    pub color: String,
    #[serde(default)]
    pub notes: String,
}

impl Event {
    /// Fresh draft shown by the editor before the first save.
    /// The empty title keeps the draft unsaveable until the user types one.
    pub fn draft() -> Self {
        Self {
            id: fresh_id(),
            title: String::new(),
            day: Weekday::Monday,
            start: "09:00".to_string(),
            end: "10:00".to_string(),
            category: String::new(),
            color: default_accent_color(),
            notes: String::new(),
        }
    }
}

/// New opaque event identifier.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}
