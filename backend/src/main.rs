//! Salesmen service entry-point: resolves settings, seeds the store and runs
//! the HTTP server.

mod server;

use actix_web::web;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use salesmen::inbound::http::health::HealthState;
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::parse();
    let config = ServerConfig::from_settings(&settings);

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(
        workers = settings.workers.get(),
        seeded = !settings.no_seed,
        "REST API listening at http://localhost:{}",
        settings.port
    );
    server.await
}
