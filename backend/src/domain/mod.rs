//! Domain primitives, ports and services.
//!
//! Purpose: Define strongly typed records and the use-cases operating on them
//! without depending on Actix or any storage detail. Inbound adapters call
//! the driving ports in [`ports`]; outbound adapters implement the driven
//! [`ports::RecordRepository`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Record (alias to `record::Record`): a single CRUD entity.
//! - RecordsService: implementation of the record driving ports.
//! - ServiceProfile: configuration snapshot echoed to clients.

pub mod error;
pub mod ports;
pub mod record;
pub mod records_service;
pub mod service_profile;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::record::{Record, RecordId, RecordName, RecordValidationError};
pub use self::records_service::RecordsService;
pub use self::service_profile::{DatabaseProfile, ServiceProfile};
pub use self::trace_id::TraceId;
