//! Display settings persisted alongside the events.
//! These are board chrome (title, colors, photo) plus the dense-hours
//! presentation toggle; none of them affect stored events.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_background_color")]
    pub background_color: String,
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
    /// Data-URI or file reference for the board photo, if any.
    #[serde(default)]
    pub photo: Option<String>,
    /// Half-hour row labels instead of hourly ones.
    #[serde(default)]
    pub dense_hours: bool,
}

pub fn default_title() -> String {
    "Kids Weekly Planner".to_string()
}

pub fn default_background_color() -> String {
    "#f6f4ef".to_string()
}

pub fn default_accent_color() -> String {
    "#4a7fd4".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            background_color: default_background_color(),
            accent_color: default_accent_color(),
            photo: None,
            dense_hours: false,
        }
    }
}
