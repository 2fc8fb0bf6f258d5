//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::sync::Arc;

use salesmen::domain::ports::SalesmanRepository;
use salesmen::outbound::memory::InMemorySalesmanStore;

use super::settings::ServerSettings;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) workers: NonZeroUsize,
    pub(crate) salesmen: Arc<dyn SalesmanRepository>,
}

impl ServerConfig {
    /// Construct a configuration serving an empty store on one worker.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            workers: NonZeroUsize::MIN,
            salesmen: Arc::new(InMemorySalesmanStore::new()),
        }
    }

    /// Build the configuration described by resolved settings, seeding the
    /// store with the example salesmen unless disabled.
    #[must_use]
    pub fn from_settings(settings: &ServerSettings) -> Self {
        let store = if settings.no_seed {
            InMemorySalesmanStore::new()
        } else {
            InMemorySalesmanStore::seeded()
        };
        Self::new(settings.bind_addr())
            .with_workers(settings.workers)
            .with_salesmen(Arc::new(store))
    }

    /// Set the number of actix worker threads.
    #[must_use]
    pub const fn with_workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = workers;
        self
    }

    /// Replace the store the handlers operate on.
    #[must_use]
    pub fn with_salesmen(mut self, salesmen: Arc<dyn SalesmanRepository>) -> Self {
        self.salesmen = salesmen;
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by server bootstrap tests")
    )]
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
