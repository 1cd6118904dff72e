//! Backend entry-point: loads settings, prepares the store and serves HTTP.

mod server;

use std::io;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use service_intake::outbound::persistence::{PoolConfig, initialise_storage};
use service_intake::settings::{CliArgs, Settings};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let settings = Settings::from_args(CliArgs::parse()).map_err(|err| {
        error!(error = %err, "invalid configuration");
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    let repository = initialise_storage(PoolConfig::new(settings.database_url()))
        .await
        .map_err(|err| {
            error!(error = %err, "storage initialisation failed");
            io::Error::other(err)
        })?;

    let server = create_server(ServerConfig::new(settings.bind_addr(), repository))?;
    info!(addr = %settings.bind_addr(), "listening");
    server.await
}
