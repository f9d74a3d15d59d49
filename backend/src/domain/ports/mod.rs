//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`RecordsQuery`], [`RecordsCommand`]) are called by inbound
//! adapters. The driven port [`RecordRepository`] is implemented by outbound
//! adapters such as the in-memory record store.

mod macros;
pub(crate) use macros::define_port_error;

mod record_repository;
mod records_command;
mod records_query;

#[cfg(test)]
pub use record_repository::MockRecordRepository;
pub use record_repository::{RecordRepository, RecordRepositoryError};
#[cfg(test)]
pub use records_command::MockRecordsCommand;
pub use records_command::RecordsCommand;
#[cfg(test)]
pub use records_query::MockRecordsQuery;
pub use records_query::RecordsQuery;
