//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use serde_json::Value;

use crate::Trace;
use crate::domain::ports::SalesmanRepository;
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemorySalesmanStore;

/// Build an application serving the salesmen API over `repository`.
///
/// The app is wrapped in [`Trace`] so error responses carry a `trace-id`.
pub fn test_app(
    repository: Arc<dyn SalesmanRepository>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(repository)))
        .wrap(Trace)
        .configure(configure)
}

/// Application backed by a fresh store holding the example salesmen.
pub fn seeded_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    test_app(Arc::new(InMemorySalesmanStore::seeded()))
}

/// Read a JSON value from `key` of an object, panicking with context.
pub fn field<'a>(value: &'a Value, key: &str) -> &'a Value {
    value
        .get(key)
        .unwrap_or_else(|| panic!("expected `{key}` in {value}"))
}
