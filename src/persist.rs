//! Fire-and-forget snapshot persistence.
//!
//! The planner never blocks on storage: a mutation enqueues the full JSON
//! value for a key and a single worker thread applies the writes in order.
//! A failed write is logged and dropped; every write carries the entire
//! value for its key, so the next mutation fully replaces it anyway.

use std::collections::HashMap;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use crate::errors::AppResult;

/// Snapshot keys. Each is read and written independently and falls back to
/// its own default when absent or corrupt.
pub const KEY_TITLE: &str = "title";
pub const KEY_BACKGROUND_COLOR: &str = "background_color";
pub const KEY_ACCENT_COLOR: &str = "accent_color";
pub const KEY_PHOTO: &str = "photo";
pub const KEY_EVENTS: &str = "events";
pub const KEY_DENSE_HOURS: &str = "dense_hours";

/// Keyed JSON storage behind the planner. The on-disk implementation lives
/// in the db module; tests inject [`MemoryStore`].
pub trait SnapshotStore: Send {
    fn read(&self, key: &str) -> AppResult<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// Read one key and decode it, falling back to `default` when the key is
/// absent, unreadable, or its JSON no longer parses. Startup must not fail
/// on a bad snapshot entry.
pub fn load_or_default<T, S>(store: &S, key: &str, default: impl FnOnce() -> T) -> T
where
    T: serde::de::DeserializeOwned,
    S: SnapshotStore + ?Sized,
{
    match store.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("snapshot key '{key}' held corrupt JSON, using default: {err}");
                default()
            }
        },
        Ok(None) => default(),
        Err(err) => {
            log::debug!("snapshot key '{key}' unreadable, using default: {err}");
            default()
        }
    }
}

/// Background writer owning the storage port. Dropping it closes the
/// channel; the worker drains whatever is queued and exits.
pub struct Persister {
    tx: Option<Sender<(String, String)>>,
    worker: Option<JoinHandle<()>>,
}

impl Persister {
    /// Spawn the worker thread around a storage port.
    pub fn spawn(mut store: Box<dyn SnapshotStore>) -> Self {
        let (tx, rx) = mpsc::channel::<(String, String)>();
        let worker = thread::spawn(move || {
            for (key, value) in rx {
                if let Err(err) = store.write(&key, &value) {
                    log::debug!("snapshot write for '{key}' dropped: {err}");
                }
            }
        });
        Self {
            tx: Some(tx),
            worker: Some(worker),
        }
    }

    /// Enqueue a write. Never blocks and never reports back; a send after
    /// the worker died has nowhere to go and is dropped like a failed
    /// write.
    pub fn queue(&self, key: &str, value: String) {
        if let Some(tx) = &self.tx {
            let _ = tx.send((key.to_string(), value));
        }
    }
}

impl Drop for Persister {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// In-memory snapshot store. Clones share one map, so a test can keep a
/// handle while the planner's worker thread owns the other.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw entry access for assertions.
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    /// Seed an entry, e.g. a deliberately corrupt one.
    pub fn put(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock still holds the map; writes are whole-value so
        // there is no torn state to protect against.
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
