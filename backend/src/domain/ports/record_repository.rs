//! Driven port for record storage adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Record, RecordId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by record repository adapters.
    pub enum RecordRepositoryError {
        /// No record carries the requested identifier.
        NotFound { id: RecordId } => "record {id} not found",
    }
}

/// Storage port for records.
///
/// Implementations keep records in insertion order and resolve an id to the
/// first record carrying it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Return every record in insertion order.
    async fn list(&self) -> Result<Vec<Record>, RecordRepositoryError>;

    /// Return the first record whose id matches.
    async fn find(&self, id: RecordId) -> Result<Record, RecordRepositoryError>;

    /// Append a record without checking for id collisions.
    async fn insert(&self, record: Record) -> Result<Record, RecordRepositoryError>;

    /// Overwrite the first record matching `id` in place.
    ///
    /// The replacement's own id may differ from `id`.
    async fn replace(&self, id: RecordId, record: Record)
    -> Result<Record, RecordRepositoryError>;

    /// Remove and return the first record matching `id`.
    async fn delete(&self, id: RecordId) -> Result<Record, RecordRepositoryError>;
}
