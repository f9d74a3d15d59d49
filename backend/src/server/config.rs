//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use items_backend::domain::ServiceProfile;
use items_backend::outbound::memory::RecordStore;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) profile: ServiceProfile,
    pub(crate) favicon_path: PathBuf,
    pub(crate) store: Arc<RecordStore>,
}

impl ServerConfig {
    /// Construct a server configuration with an empty record store.
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        profile: ServiceProfile,
        favicon_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            bind_addr,
            profile,
            favicon_path: favicon_path.into(),
            store: Arc::new(RecordStore::new()),
        }
    }

    /// Serve records from an existing store instead of a fresh one.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Used by server tests to inspect shared state")
    )]
    #[must_use]
    pub fn with_store(mut self, store: Arc<RecordStore>) -> Self {
        self.store = store;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
