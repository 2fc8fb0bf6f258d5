//! In-memory salesmen REST service.
//!
//! The [`domain`] owns the salesman model and the store port,
//! [`outbound::memory`] provides the store, and [`inbound::http`] exposes it
//! over actix-web.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
