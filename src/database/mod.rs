use crate::domain::{Entry, NewEntry};
use anyhow::Result;
use async_trait::async_trait;

pub mod sqlite;

// an entryrepository can be shared between threads (referencable)
// sqlx::Pool is thread safe
// generic interface over entry storage, db specific implementation in "sqlite.rs"
#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn list_entries(&self) -> Result<Vec<Entry>>;

    // write operations
    async fn insert_entry(&self, new: &NewEntry) -> Result<Entry>;
    // false when no row had that id
    async fn delete_entry(&self, id: i64) -> Result<bool>;
}
