use weekplan::errors::AppError;
use weekplan::models::weekday::Weekday;
use weekplan::persist::{KEY_DENSE_HOURS, KEY_EVENTS, KEY_TITLE, MemoryStore};
use weekplan::settings::DisplaySettings;
use weekplan::store::Planner;

mod common;
use common::{event, planner};

#[test]
fn test_save_inserts_and_updates_by_id() {
    let (mut planner, _store) = planner();

    let ev = event("Piano", Weekday::Monday, "10:00", "11:00");
    let id = ev.id.clone();
    planner.save_event(ev).unwrap();
    assert_eq!(planner.events().len(), 1);

    let mut edited = planner.edit_event(&id).unwrap();
    edited.title = "Piano practice".to_string();
    planner.save_event(edited).unwrap();

    assert_eq!(planner.events().len(), 1);
    assert_eq!(planner.events()[0].title, "Piano practice");
    assert_eq!(planner.events()[0].id, id);
}

#[test]
fn test_rejected_save_leaves_store_unchanged() {
    let (mut planner, _store) = planner();
    planner
        .save_event(event("Piano", Weekday::Monday, "10:00", "11:00"))
        .unwrap();

    let bad = event("Nap", Weekday::Monday, "10:00", "09:00");
    assert!(matches!(
        planner.save_event(bad),
        Err(AppError::InvalidTimeRange { .. })
    ));
    assert_eq!(planner.events().len(), 1);
    assert_eq!(planner.events()[0].title, "Piano");
}

#[test]
fn test_rejected_empty_title_leaves_store_unchanged() {
    let (mut planner, _store) = planner();
    let bad = event("  ", Weekday::Monday, "09:00", "10:00");
    assert!(matches!(
        planner.save_event(bad),
        Err(AppError::MissingTitle)
    ));
    assert!(planner.events().is_empty());
}

#[test]
fn test_save_with_overlap_warns_but_stores() {
    let (mut planner, _store) = planner();
    let first = event("Homework", Weekday::Tuesday, "16:00", "17:30");
    let first_id = first.id.clone();
    let outcome = planner.save_event(first).unwrap();
    assert!(outcome.overlap.is_none());

    let second = event("Snack", Weekday::Tuesday, "17:00", "17:15");
    let outcome = planner.save_event(second).unwrap();
    let warning = outcome.overlap.expect("overlap warning");
    assert_eq!(warning.id, first_id);
    assert_eq!(warning.title, "Homework");
    assert_eq!(planner.events().len(), 2);
}

#[test]
fn test_editing_does_not_warn_against_itself() {
    let (mut planner, _store) = planner();
    let ev = event("Homework", Weekday::Tuesday, "16:00", "17:00");
    let id = ev.id.clone();
    planner.save_event(ev).unwrap();

    let mut edited = planner.edit_event(&id).unwrap();
    edited.end = "17:30".to_string();
    let outcome = planner.save_event(edited).unwrap();
    assert!(outcome.overlap.is_none());
}

#[test]
fn test_add_ignores_duplicate_id() {
    let (mut planner, _store) = planner();
    let ev = event("Piano", Weekday::Monday, "10:00", "11:00");
    let mut dup = event("Impostor", Weekday::Friday, "12:00", "13:00");
    dup.id = ev.id.clone();

    planner.add(ev);
    planner.add(dup);

    assert_eq!(planner.events().len(), 1);
    assert_eq!(planner.events()[0].title, "Piano");
}

#[test]
fn test_update_unknown_id_errors() {
    let (mut planner, _store) = planner();
    let ev = event("Ghost", Weekday::Monday, "10:00", "11:00");
    assert!(matches!(
        planner.update(ev),
        Err(AppError::UnknownEvent(_))
    ));
}

#[test]
fn test_delete_removes_and_unknown_is_noop() {
    let (mut planner, _store) = planner();
    let ev = event("Piano", Weekday::Monday, "10:00", "11:00");
    let id = ev.id.clone();
    planner.save_event(ev).unwrap();

    planner.delete_event("no-such-id");
    assert_eq!(planner.events().len(), 1);

    planner.delete_event(&id);
    assert!(planner.events().is_empty());
}

#[test]
fn test_draft_events_get_fresh_ids() {
    let (planner, _store) = planner();
    let a = planner.draft_event();
    let b = planner.draft_event();
    assert_ne!(a.id, b.id);
    assert!(a.title.is_empty());
    assert_eq!(a.start, "09:00");
    assert_eq!(a.end, "10:00");
}

#[test]
fn test_mutations_reach_the_snapshot_store() {
    let (mut planner, store) = planner();
    planner
        .save_event(event("Piano", Weekday::Monday, "10:00", "11:00"))
        .unwrap();
    // dropping the planner drains the write queue
    drop(planner);

    let raw = store.get(KEY_EVENTS).expect("events key written");
    assert!(raw.contains("Piano"));
}

#[test]
fn test_reload_round_trips_through_the_port() {
    let (mut planner, store) = planner();
    planner
        .save_event(event("Piano", Weekday::Monday, "10:00", "11:00"))
        .unwrap();
    planner.set_dense_hours(true);
    drop(planner);

    let reloaded = Planner::load(Box::new(store.clone()));
    assert_eq!(reloaded.events().len(), 1);
    assert_eq!(reloaded.events()[0].title, "Piano");
    assert!(reloaded.settings().dense_hours);
}

#[test]
fn test_corrupt_snapshot_keys_fall_back_to_defaults() {
    let store = MemoryStore::new();
    store.put(KEY_EVENTS, "not json at all {{{");
    store.put(KEY_TITLE, "\"Our Week\"");
    store.put(KEY_DENSE_HOURS, "maybe");

    let planner = Planner::load(Box::new(store));
    // corrupt keys degrade independently; the good one survives
    assert!(planner.events().is_empty());
    assert_eq!(planner.settings().title, "Our Week");
    assert!(!planner.settings().dense_hours);
    assert_eq!(planner.settings().background_color, "#f6f4ef");
}

#[test]
fn test_set_display_settings_persists_every_key() {
    let (mut planner, store) = planner();
    let settings = DisplaySettings {
        title: "Our Week".to_string(),
        background_color: "#ffffff".to_string(),
        accent_color: "#ff0066".to_string(),
        photo: Some("photo.png".to_string()),
        dense_hours: true,
    };
    planner.set_display_settings(settings.clone());
    assert_eq!(planner.settings(), &settings);
    drop(planner);

    let reloaded = Planner::load(Box::new(store.clone()));
    assert_eq!(reloaded.settings(), &settings);
}
