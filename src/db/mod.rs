//! SQLite-backed implementation of the snapshot port.

pub mod initialize;
pub mod pool;
pub mod queries;

pub use pool::DbPool;

use std::path::{Path, PathBuf};

use crate::errors::AppResult;
use crate::persist::SnapshotStore;

/// File name of the snapshot database inside [`data_dir`].
pub const SNAPSHOT_FILE: &str = "weekplan.sqlite";

/// Platform data directory for the planner.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("weekplan")
}

/// On-disk snapshot store: one key-value table holding JSON documents.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open (and initialize) a snapshot database at `path`.
    pub fn open(path: &Path) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        initialize::init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    /// Open the snapshot database at the default platform location,
    /// creating the directory on first run.
    pub fn open_default() -> AppResult<Self> {
        let dir = data_dir();
        std::fs::create_dir_all(&dir)?;
        Self::open(&dir.join(SNAPSHOT_FILE))
    }
}

impl SnapshotStore for SqliteStore {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        queries::get_entry(&self.pool.conn, key)
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        queries::set_entry(&self.pool.conn, key, value)
    }
}
