//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without a running server.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::ports::{RecordsCommand, RecordsQuery};
use crate::domain::{RecordsService, ServiceProfile};
use crate::outbound::memory::RecordStore;

/// Parameter object bundling the port implementations used by handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub records: Arc<dyn RecordsCommand>,
    pub records_query: Arc<dyn RecordsQuery>,
}

impl HttpStatePorts {
    /// Wire both record ports to one service over `store`.
    pub fn from_store(store: Arc<RecordStore>) -> Self {
        let service = Arc::new(RecordsService::new(store));
        Self {
            records: service.clone(),
            records_query: service,
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub records: Arc<dyn RecordsCommand>,
    pub records_query: Arc<dyn RecordsQuery>,
    pub profile: Arc<ServiceProfile>,
    pub favicon_path: PathBuf,
}

impl HttpState {
    /// Construct state from ports, the echoed profile and the favicon location.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use items_backend::domain::ServiceProfile;
    /// use items_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use items_backend::outbound::memory::RecordStore;
    ///
    /// let ports = HttpStatePorts::from_store(Arc::new(RecordStore::new()));
    /// let state = HttpState::new(ports, ServiceProfile::default(), "favicon.ico");
    /// let _records = state.records_query.clone();
    /// ```
    pub fn new(
        ports: HttpStatePorts,
        profile: ServiceProfile,
        favicon_path: impl Into<PathBuf>,
    ) -> Self {
        let HttpStatePorts {
            records,
            records_query,
        } = ports;
        Self {
            records,
            records_query,
            profile: Arc::new(profile),
            favicon_path: favicon_path.into(),
        }
    }
}
