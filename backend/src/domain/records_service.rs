//! Record domain service.
//!
//! Implements the record driving ports on top of any [`RecordRepository`],
//! translating repository failures into domain [`Error`]s.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{RecordRepository, RecordRepositoryError, RecordsCommand, RecordsQuery};
use crate::domain::{Error, Record, RecordId};

/// Record service implementing [`RecordsQuery`] and [`RecordsCommand`].
#[derive(Clone)]
pub struct RecordsService<R> {
    repository: Arc<R>,
}

impl<R> RecordsService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: RecordRepositoryError) -> Error {
    match error {
        RecordRepositoryError::NotFound { id } => Error::not_found(format!("record {id} not found"))
            .with_details(json!({ "id": id.get(), "code": "record_not_found" })),
    }
}

#[async_trait]
impl<R> RecordsQuery for RecordsService<R>
where
    R: RecordRepository,
{
    async fn list_records(&self) -> Result<Vec<Record>, Error> {
        let records = self.repository.list().await.map_err(map_repository_error)?;
        debug!(count = records.len(), "listed records");
        Ok(records)
    }

    async fn fetch_record(&self, id: RecordId) -> Result<Record, Error> {
        self.repository
            .find(id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> RecordsCommand for RecordsService<R>
where
    R: RecordRepository,
{
    async fn create_record(&self, record: Record) -> Result<Record, Error> {
        let id = record.id();
        let created = self
            .repository
            .insert(record)
            .await
            .map_err(map_repository_error)?;
        debug!(%id, "record created");
        Ok(created)
    }

    async fn replace_record(&self, id: RecordId, record: Record) -> Result<Record, Error> {
        let replacement_id = record.id();
        let replaced = self
            .repository
            .replace(id, record)
            .await
            .map_err(map_repository_error)?;
        debug!(%id, %replacement_id, "record replaced");
        Ok(replaced)
    }

    async fn delete_record(&self, id: RecordId) -> Result<Record, Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        debug!(%id, "record deleted");
        Ok(deleted)
    }
}
