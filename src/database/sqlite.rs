use crate::database::EntryRepository;
use crate::domain::{DEFAULT_STATUS, Entry, NewEntry};
use crate::features::waitlist::model::DbEntry;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryRepository for SqliteRepository {
    async fn list_entries(&self) -> Result<Vec<Entry>> {
        // primary-key order doubles as arrival order for the waitlist
        let db_entries = sqlx::query_as::<_, DbEntry>(
            "SELECT id, name, phone, status FROM entries ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(db_entries.into_iter().map(Entry::from).collect())
    }

    async fn insert_entry(&self, new: &NewEntry) -> Result<Entry> {
        let result = sqlx::query("INSERT INTO entries (name, phone, status) VALUES (?, ?, ?)")
            .bind(new.name.as_str())
            .bind(new.phone.as_deref())
            .bind(DEFAULT_STATUS)
            .execute(&self.pool)
            .await
            .context(format!("Failed to insert entry {}", new.name))?;

        // sqlite hands the id back on the connection, no re-query needed
        Ok(Entry {
            id: result.last_insert_rowid(),
            name: new.name.clone(),
            phone: new.phone.clone(),
            status: DEFAULT_STATUS.to_string(),
        })
    }

    async fn delete_entry(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM entries WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context(format!("Failed to delete entry {}", id))?;

        Ok(result.rows_affected() > 0)
    }
}
