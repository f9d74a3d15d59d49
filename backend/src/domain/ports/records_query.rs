//! Driving port for record reads.

use async_trait::async_trait;

use crate::domain::{Error, Record, RecordId};

/// Domain use-case port for reading records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordsQuery: Send + Sync {
    /// List all records in insertion order.
    async fn list_records(&self) -> Result<Vec<Record>, Error>;

    /// Fetch the first record with the given id.
    async fn fetch_record(&self, id: RecordId) -> Result<Record, Error>;
}
