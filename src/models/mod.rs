pub mod event;
pub mod weekday;

pub use event::Event;
pub use weekday::Weekday;
