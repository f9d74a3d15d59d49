//! Ordered in-memory record collection.
//!
//! Records live in a `Vec` behind a single mutex held for the duration of
//! each operation. Lookups are linear scans; when ids collide the first
//! record in insertion order wins.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{RecordRepository, RecordRepositoryError};
use crate::domain::{Record, RecordId};

/// Process-lifetime store of records in insertion order.
///
/// # Examples
/// ```
/// use items_backend::domain::{Record, RecordId, RecordName};
/// use items_backend::outbound::memory::RecordStore;
///
/// let store = RecordStore::new();
/// let lamp = Record::new(RecordId::new(1), RecordName::new("Lamp").expect("name"), 10.0);
/// store.insert(lamp.clone());
/// assert_eq!(store.get(RecordId::new(1)), Ok(lamp));
/// assert!(store.get(RecordId::new(99)).is_err());
/// ```
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Mutex<Vec<Record>>,
}

impl RecordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // No operation panics between mutations, so a poisoned guard still wraps
    // a consistent sequence.
    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return all records in insertion order.
    pub fn list(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Return the first record whose id matches.
    ///
    /// # Errors
    /// [`RecordRepositoryError::NotFound`] when no record carries `id`.
    pub fn get(&self, id: RecordId) -> Result<Record, RecordRepositoryError> {
        self.lock()
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| RecordRepositoryError::not_found(id))
    }

    /// Append `record` to the end of the sequence.
    ///
    /// Duplicate ids are accepted; the earlier record keeps shadowing the new
    /// one for id lookups.
    pub fn insert(&self, record: Record) -> Record {
        let mut records = self.lock();
        let id = record.id();
        if records.iter().any(|existing| existing.id() == id) {
            warn!(%id, "inserting record with duplicate id");
        }
        records.push(record.clone());
        record
    }

    /// Overwrite the first record matching `id` at its position.
    ///
    /// # Errors
    /// [`RecordRepositoryError::NotFound`] when no record carries `id`.
    pub fn replace(&self, id: RecordId, record: Record) -> Result<Record, RecordRepositoryError> {
        let mut records = self.lock();
        let slot = records
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or_else(|| RecordRepositoryError::not_found(id))?;
        *slot = record.clone();
        Ok(record)
    }

    /// Remove and return the first record matching `id`.
    ///
    /// # Errors
    /// [`RecordRepositoryError::NotFound`] when no record carries `id`.
    pub fn delete(&self, id: RecordId) -> Result<Record, RecordRepositoryError> {
        let mut records = self.lock();
        let position = records
            .iter()
            .position(|existing| existing.id() == id)
            .ok_or_else(|| RecordRepositoryError::not_found(id))?;
        Ok(records.remove(position))
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[async_trait]
impl RecordRepository for RecordStore {
    async fn list(&self) -> Result<Vec<Record>, RecordRepositoryError> {
        Ok(Self::list(self))
    }

    async fn find(&self, id: RecordId) -> Result<Record, RecordRepositoryError> {
        self.get(id)
    }

    async fn insert(&self, record: Record) -> Result<Record, RecordRepositoryError> {
        Ok(Self::insert(self, record))
    }

    async fn replace(
        &self,
        id: RecordId,
        record: Record,
    ) -> Result<Record, RecordRepositoryError> {
        Self::replace(self, id, record)
    }

    async fn delete(&self, id: RecordId) -> Result<Record, RecordRepositoryError> {
        Self::delete(self, id)
    }
}
