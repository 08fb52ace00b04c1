mod schema;

use std::path::Path;

use chrono::Local;
use rusqlite::{params, Connection};

use crate::error::{BudgetError, Result};
use crate::store::BudgetStore;

#[cfg(test)]
mod tests;

/// Key under which the single whole-budget snapshot lives.
const SNAPSHOT_KEY: &str = "budget";

/// Bumped whenever the snapshot JSON layout changes shape.
const SNAPSHOT_FORMAT: i32 = 1;

/// Persists the whole `BudgetStore` as one JSON snapshot row. Every save is
/// a full synchronous overwrite; load happens once at startup.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        let mut storage = Self { conn };
        storage.migrate()?;
        Ok(storage)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut storage = Self { conn };
        storage.migrate()?;
        Ok(storage)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    /// A missing snapshot row is the normal first-run case and yields the
    /// empty store. Corrupt JSON and unknown formats are errors; the caller
    /// decides what to do with them.
    pub fn load(&self) -> Result<BudgetStore> {
        let result = self.conn.query_row(
            "SELECT format, data FROM snapshots WHERE key = ?1",
            params![SNAPSHOT_KEY],
            |row| Ok((row.get::<_, i32>(0)?, row.get::<_, String>(1)?)),
        );
        match result {
            Ok((format, _)) if format > SNAPSHOT_FORMAT => {
                Err(BudgetError::UnsupportedFormat(format))
            }
            Ok((_, data)) => Ok(serde_json::from_str(&data)?),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(BudgetStore::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, store: &BudgetStore) -> Result<()> {
        let data = serde_json::to_string(store)?;
        self.conn.execute(
            "INSERT INTO snapshots (key, format, data, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(key) DO UPDATE SET format = ?2, data = ?3, updated_at = ?4",
            params![
                SNAPSHOT_KEY,
                SNAPSHOT_FORMAT,
                data,
                Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            ],
        )?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn raw_write(&self, format: i32, data: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO snapshots (key, format, data, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(key) DO UPDATE SET format = ?2, data = ?3, updated_at = ?4",
            params![SNAPSHOT_KEY, format, data, "test"],
        )?;
        Ok(())
    }
}
