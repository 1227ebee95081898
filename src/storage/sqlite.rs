//! `KeyValueStore` on top of the SQLite `kv_store` table.

use super::KeyValueStore;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        run_pending_migrations(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        run_pending_migrations(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
        })?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .with_conn(|conn| conn.execute("DELETE FROM kv_store WHERE key = ?1", [key]))?;
        Ok(())
    }
}
