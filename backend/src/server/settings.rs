//! Command-line and environment settings for the server binary.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroUsize;

use clap::Parser;

pub(crate) const DEFAULT_PORT: u16 = 3000;

/// Every environment variable the settings read; tests lock all of them.
#[cfg(test)]
pub(crate) const ENV_VARS: [&str; 4] = [
    "SALESMEN_HOST",
    "SALESMEN_PORT",
    "SALESMEN_WORKERS",
    "SALESMEN_NO_SEED",
];

/// Settings resolved from flags, then `SALESMEN_*` environment variables,
/// then defaults.
#[derive(Debug, Clone, Parser)]
#[command(name = "salesmen", about = "In-memory salesmen REST service")]
pub struct ServerSettings {
    /// Address to bind the listener to.
    #[arg(long, env = "SALESMEN_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
    /// TCP port to listen on.
    #[arg(long, env = "SALESMEN_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Number of actix worker threads.
    #[arg(long, env = "SALESMEN_WORKERS", default_value = "1")]
    pub workers: NonZeroUsize,
    /// Start with an empty store instead of the example salesmen.
    #[arg(long = "no-seed", env = "SALESMEN_NO_SEED")]
    pub no_seed: bool,
}

impl ServerSettings {
    /// Socket address combining `host` and `port`.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
