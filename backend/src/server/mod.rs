//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use salesmen::Trace;
#[cfg(debug_assertions)]
use salesmen::doc::ApiDoc;
use salesmen::inbound::http::configure;
use salesmen::inbound::http::health::{HealthState, live, ready};
use salesmen::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
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
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .configure(api_docs)
        .service(ready)
        .service(live)
}

/// Swagger UI and the raw OpenAPI document, debug builds only.
#[cfg_attr(
    not(debug_assertions),
    expect(unused_variables, reason = "Swagger UI is only served in debug builds")
)]
fn api_docs(cfg: &mut web::ServiceConfig) {
    #[cfg(debug_assertions)]
    cfg.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Readiness is marked once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ready_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        workers,
        salesmen,
    } = config;
    // One shared store across workers; each worker only clones the handle.
    let http_state = web::Data::new(HttpState::new(salesmen));

    let server = HttpServer::new(move || build_app(health_state.clone(), http_state.clone()))
        .workers(workers.get())
        .bind(bind_addr)?
        .run();

    ready_state.mark_ready();
    Ok(server)
}
