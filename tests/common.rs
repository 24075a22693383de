#![allow(dead_code)]
use weekplan::models::event::Event;
use weekplan::models::weekday::Weekday;
use weekplan::persist::MemoryStore;
use weekplan::store::Planner;

/// Build an event with the fields the tests care about.
pub fn event(title: &str, day: Weekday, start: &str, end: &str) -> Event {
    let mut ev = Event::draft();
    ev.title = title.to_string();
    ev.day = day;
    ev.start = start.to_string();
    ev.end = end.to_string();
    ev
}

/// Planner over a shared in-memory store; the returned handle sees every
/// write the planner's background worker applies.
pub fn planner() -> (Planner, MemoryStore) {
    let store = MemoryStore::new();
    let planner = Planner::load(Box::new(store.clone()));
    (planner, store)
}
