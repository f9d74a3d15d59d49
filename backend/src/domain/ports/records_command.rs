//! Driving port for record mutations.

use async_trait::async_trait;

use crate::domain::{Error, Record, RecordId};

/// Domain use-case port for creating, replacing and deleting records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordsCommand: Send + Sync {
    /// Append a record and return it.
    async fn create_record(&self, record: Record) -> Result<Record, Error>;

    /// Replace the record stored under `id` and return the replacement.
    async fn replace_record(&self, id: RecordId, record: Record) -> Result<Record, Error>;

    /// Delete the record stored under `id` and return it.
    async fn delete_record(&self, id: RecordId) -> Result<Record, Error>;
}
