//! weekplan library root.
//! Scheduling core for a personal weekly planner: the event model, grid
//! math, validation, layout projection, CSV interchange, and snapshot
//! persistence. The UI layer drives everything through [`store::Planner`].

pub mod db;
pub mod errors;
pub mod export;
pub mod grid;
pub mod layout;
pub mod models;
pub mod overlap;
pub mod persist;
pub mod settings;
pub mod store;
pub mod validate;

pub use errors::{AppError, AppResult};
pub use models::event::Event;
pub use models::weekday::Weekday;
pub use settings::DisplaySettings;
pub use store::{Planner, SaveOutcome};
