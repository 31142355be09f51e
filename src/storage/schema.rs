//! Database schema and connection management

use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::debug;

use crate::error::{FtpError, Result};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-backed club statistics store.
///
/// Writes go through one mutex-guarded connection. An on-disk store also
/// hands each concurrent reader its own read-only connection, so per-slot
/// fetches run side by side. In-memory stores read through the write
/// connection.
pub struct ClubDatabase {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
    /// Idle read-only connections, opened on demand and reused.
    readers: Mutex<Vec<Connection>>,
}

impl ClubDatabase {
    /// Open (creating if needed) the database at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        debug!(path = %path.display(), "opened club database");
        Self::with_connection(conn, Some(path.to_path_buf()))
    }

    pub fn new_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?, None)
    }

    fn with_connection(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        let db = Self {
            conn: Mutex::new(conn),
            path,
            readers: Mutex::new(Vec::new()),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    pub(crate) fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| FtpError::Storage {
            message: format!("database lock poisoned: {e}"),
        })
    }

    /// Run a read on a connection of its own. The reader goes back to the
    /// idle list afterwards, so callers never queue behind each other.
    pub(crate) fn with_reader<T, F>(&self, read: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let Some(path) = &self.path else {
            let conn = self.conn()?;
            return read(&*conn);
        };

        let idle = self.idle_readers()?.pop();
        let reader = match idle {
            Some(reader) => reader,
            None => {
                let reader = Connection::open_with_flags(
                    path,
                    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )?;
                reader.busy_timeout(BUSY_TIMEOUT)?;
                debug!(path = %path.display(), "opened read connection");
                reader
            }
        };

        let result = read(&reader);
        self.idle_readers()?.push(reader);
        result
    }

    /// Read connections opened so far and currently idle.
    pub fn idle_reader_count(&self) -> Result<usize> {
        Ok(self.idle_readers()?.len())
    }

    fn idle_readers(&self) -> Result<MutexGuard<'_, Vec<Connection>>> {
        self.readers.lock().map_err(|e| FtpError::Storage {
            message: format!("reader list lock poisoned: {e}"),
        })
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                name TEXT PRIMARY KEY,
                eligible INTEGER NOT NULL DEFAULT 1
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS match_stats (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player_name TEXT NOT NULL,
                season TEXT NOT NULL,
                match_date TEXT,
                minutes INTEGER NOT NULL DEFAULT 0,
                man_of_the_match INTEGER NOT NULL DEFAULT 0,
                goals INTEGER NOT NULL DEFAULT 0,
                assists INTEGER NOT NULL DEFAULT 0,
                goals_conceded INTEGER NOT NULL DEFAULT 0,
                clean_sheets INTEGER NOT NULL DEFAULT 0,
                yellow_cards INTEGER NOT NULL DEFAULT 0,
                red_cards INTEGER NOT NULL DEFAULT 0,
                saves INTEGER NOT NULL DEFAULT 0,
                own_goals INTEGER NOT NULL DEFAULT 0,
                penalties_scored INTEGER NOT NULL DEFAULT 0,
                penalties_missed INTEGER NOT NULL DEFAULT 0,
                penalties_conceded INTEGER NOT NULL DEFAULT 0,
                penalties_saved INTEGER NOT NULL DEFAULT 0,
                class TEXT NOT NULL DEFAULT '',
                FOREIGN KEY (player_name) REFERENCES players(name)
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_match_stats_player_season
             ON match_stats(player_name, season)",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS totw (
                season TEXT PRIMARY KEY,
                formation TEXT NOT NULL,
                cached_score INTEGER
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS totw_slots (
                season TEXT NOT NULL,
                slot TEXT NOT NULL,
                player_name TEXT NOT NULL DEFAULT '',
                PRIMARY KEY (season, slot),
                FOREIGN KEY (season) REFERENCES totw(season) ON DELETE CASCADE
            )",
            [],
        )?;

        Ok(())
    }
}
