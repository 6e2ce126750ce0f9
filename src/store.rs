use std::path::Path;
use std::thread;
use std::time::Duration;

use rusqlite::Connection;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::error::Result;
use crate::grid::GridIndex;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS searches (
    grid_hash TEXT NOT NULL,
    word TEXT NOT NULL,
    rank INTEGER NOT NULL,
    PRIMARY KEY (grid_hash, word)
);";

/// Hex SHA-256 of the grid rows joined by `|`.
pub fn grid_hash(grid: &GridIndex) -> String {
    let rows: Vec<String> = grid.lines().collect();
    let mut hasher = Sha256::new();
    hasher.update(rows.join("|").as_bytes());
    hex::encode(hasher.finalize())
}

pub(crate) fn retry_with_backoff<F, T, E>(mut f: F, max_attempts: usize) -> std::result::Result<T, E>
where
    F: FnMut() -> std::result::Result<T, E>,
    E: std::fmt::Display,
{
    let mut attempt = 1;
    loop {
        match f() {
            Ok(result) => return Ok(result),
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                warn!(attempt, error = %e, "store write failed, retrying");
                // 50ms, 100ms, 200ms, 400ms
                thread::sleep(Duration::from_millis(50 * (1 << (attempt - 1))));
                attempt += 1;
            }
        }
    }
}

/// SQLite log of ranked results, keyed by [`grid_hash`].
pub struct ResultStore {
    conn: Connection,
}

impl ResultStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let _ = conn.pragma_update(None, "journal_mode", "WAL");
        let _ = conn.pragma_update(None, "synchronous", "OFF");
        conn.busy_timeout(Duration::from_millis(60000))?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Replaces whatever was recorded for `grid_hash` with `words`, in rank order.
    pub fn record(&mut self, grid_hash: &str, words: &[String]) -> Result<()> {
        let conn = &mut self.conn;
        retry_with_backoff(
            || {
                let tx = conn.transaction()?;
                tx.execute("DELETE FROM searches WHERE grid_hash = ?1", (grid_hash,))?;
                {
                    let mut stmt = tx.prepare(
                        "INSERT OR REPLACE INTO searches (grid_hash, word, rank) VALUES (?1, ?2, ?3)",
                    )?;
                    for (rank, word) in words.iter().enumerate() {
                        stmt.execute((grid_hash, word, rank as i64))?;
                    }
                }
                tx.commit()?;
                Ok::<(), rusqlite::Error>(())
            },
            5,
        )?;
        debug!(grid_hash, count = words.len(), "recorded result");
        Ok(())
    }

    pub fn load(&self, grid_hash: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT word FROM searches WHERE grid_hash = ?1 ORDER BY rank")?;
        let words = stmt
            .query_map((grid_hash,), |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(words)
    }
}
