//! In-memory storage adapters.
//!
//! State held here starts empty and is discarded when the process exits.

mod record_store;

pub use record_store::RecordStore;
