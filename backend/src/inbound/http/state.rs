//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the store port and can run against a fresh store in every test.

use std::sync::Arc;

use crate::domain::ports::SalesmanRepository;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use salesmen::inbound::http::state::HttpState;
/// use salesmen::outbound::memory::InMemorySalesmanStore;
///
/// let state = HttpState::new(Arc::new(InMemorySalesmanStore::seeded()));
/// let _salesmen = state.salesmen.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Store port shared by every worker.
    pub salesmen: Arc<dyn SalesmanRepository>,
}

impl HttpState {
    /// Construct state around a store implementation.
    #[must_use]
    pub const fn new(salesmen: Arc<dyn SalesmanRepository>) -> Self {
        Self { salesmen }
    }
}
