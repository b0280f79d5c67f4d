use crate::database::EntryRepository;
use crate::domain::{Entry, NewEntry};
use anyhow::{Context, Result};

// the one stateful object request handlers get: owns the repository and
// exposes the waitlist operations. built once in main, shared via AppState.
pub struct WaitlistService {
    repo: Box<dyn EntryRepository>,
}

impl WaitlistService {
    pub fn new(repo: Box<dyn EntryRepository>) -> Self {
        Self { repo }
    }

    /// All entries in arrival (primary-key) order.
    pub async fn list(&self) -> Result<Vec<Entry>> {
        self.repo
            .list_entries()
            .await
            .context("Failed to load waitlist entries")
    }

    /// Persists a new entry; every entry starts out "waiting".
    pub async fn add(&self, new: NewEntry) -> Result<Entry> {
        let entry = self.repo.insert_entry(&new).await?;
        tracing::info!("added {} to the waitlist as entry {}", entry.name, entry.id);
        Ok(entry)
    }

    /// Removes an entry; false means no entry had that id.
    pub async fn remove(&self, id: i64) -> Result<bool> {
        let removed = self.repo.delete_entry(id).await?;
        if removed {
            tracing::info!("removed entry {} from the waitlist", id);
        }
        Ok(removed)
    }
}
