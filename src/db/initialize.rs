use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the snapshot schema: a single key-value table whose values
/// are JSON documents. Safe to run on every open.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS snapshot (
             key   TEXT PRIMARY KEY,
             value TEXT NOT NULL
         )",
    )?;
    Ok(())
}
