//! Key-value storage backends and the workout persistence adapter.

pub mod memory;
pub mod persistence;
pub mod record;
pub mod sqlite;

use crate::errors::AppResult;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Minimal string-keyed store, the shape of a browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}
