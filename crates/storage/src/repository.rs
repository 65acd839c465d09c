use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use vocab_core::model::EntryIndex;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of the deck-cursor slot.
///
/// The slot is a plain key-value cell: the position is kept **as text**, and
/// out-of-range or non-numeric content is the services layer's recovery
/// policy, not a storage error. `updated_at` records the last write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorRecord {
    pub position: String,
    pub updated_at: DateTime<Utc>,
}

impl CursorRecord {
    #[must_use]
    pub fn new(position: impl Into<String>, updated_at: DateTime<Utc>) -> Self {
        Self {
            position: position.into(),
            updated_at,
        }
    }

    /// Build the storage shape for a cursor position.
    #[must_use]
    pub fn from_position(position: EntryIndex, updated_at: DateTime<Utc>) -> Self {
        Self {
            position: position.to_string(),
            updated_at,
        }
    }
}

/// Repository contract for the single deck-cursor slot.
#[async_trait]
pub trait CursorRepository: Send + Sync {
    /// Read the slot.
    ///
    /// Absence is `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn load_cursor(&self) -> Result<Option<CursorRecord>, StorageError>;

    /// Write the slot, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    async fn save_cursor(&self, record: &CursorRecord) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    cursor: Arc<Mutex<Option<CursorRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl CursorRepository for InMemoryRepository {
    async fn load_cursor(&self) -> Result<Option<CursorRecord>, StorageError> {
        let guard = self
            .cursor
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_cursor(&self, record: &CursorRecord) -> Result<(), StorageError> {
        let mut guard = self
            .cursor
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(record.clone());
        Ok(())
    }
}

/// Aggregates the cursor repository behind a trait object for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub cursor: Arc<dyn CursorRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            cursor: Arc::new(InMemoryRepository::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::time::fixed_now;

    #[tokio::test]
    async fn absent_slot_reads_as_none() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.load_cursor().await.unwrap(), None);
    }

    #[tokio::test]
    async fn slot_roundtrips_latest_write() {
        let repo = InMemoryRepository::new();
        let now = fixed_now();

        repo.save_cursor(&CursorRecord::from_position(EntryIndex::new(3), now))
            .await
            .unwrap();
        repo.save_cursor(&CursorRecord::from_position(EntryIndex::new(7), now))
            .await
            .unwrap();

        let loaded = repo.load_cursor().await.unwrap().expect("saved record");
        assert_eq!(loaded.position, "7");
        assert_eq!(loaded.updated_at, now);
    }

    #[tokio::test]
    async fn record_keeps_position_as_text() {
        let record = CursorRecord::from_position(EntryIndex::new(12), fixed_now());
        assert_eq!(record.position, "12");
    }
}
