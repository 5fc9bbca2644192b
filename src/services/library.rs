use std::sync::Arc;
use tracing::warn;

use crate::models::book::BookRecord;
use crate::models::storage::{StorageBackend, StorageError};

/// Storage key for the serialized library blob.
pub const LIBRARY_KEY: &str = "library";

type Backend = Arc<dyn StorageBackend + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// The user's local library: an ordered list of books, deduplicated by exact
/// title at add time, persisted as a single JSON blob. Every mutation
/// rewrites the whole blob.
pub struct LibraryStore {
    backend: Backend,
}

impl LibraryStore {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Current library contents. An absent or malformed blob reads as an
    /// empty library rather than an error.
    pub async fn list(&self) -> Vec<BookRecord> {
        let blob = match self.backend.read(LIBRARY_KEY).await {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read library: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&blob) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring malformed library data: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn add(&self, book: BookRecord) -> Result<AddOutcome, StorageError> {
        let mut entries = self.list().await;
        if entries.iter().any(|existing| existing.title == book.title) {
            return Ok(AddOutcome::AlreadyExists);
        }

        entries.push(book);
        self.persist(&entries).await?;
        Ok(AddOutcome::Added)
    }

    /// Removes every entry with an exactly matching title. At most one should
    /// exist given the add-time dedupe.
    pub async fn remove(&self, title: &str) -> Result<RemoveOutcome, StorageError> {
        let mut entries = self.list().await;
        let before = entries.len();
        entries.retain(|book| book.title != title);
        if entries.len() == before {
            return Ok(RemoveOutcome::NotFound);
        }

        self.persist(&entries).await?;
        Ok(RemoveOutcome::Removed)
    }

    async fn persist(&self, entries: &[BookRecord]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(entries)?;
        self.backend.write(LIBRARY_KEY, &blob).await
    }
}
