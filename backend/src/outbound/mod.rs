//! Outbound adapters implementing domain ports.
//!
//! - **memory**: the process-lifetime record store
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic.

pub mod memory;
