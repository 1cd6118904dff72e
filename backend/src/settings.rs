//! Process configuration.
//!
//! Each option is read from the command line first and falls back to an
//! environment variable: `--database-url` / `DATABASE_URL` (required) and
//! `--port` / `PORT` (defaults to 8080). The server always binds every
//! interface.

use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

use clap::Parser;
use thiserror::Error;

/// Environment variable holding the store connection string.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "PORT";
/// Port used when neither `--port` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 8080;

/// `service-intake` command arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "service-intake",
    about = "Accept service request submissions and store them in PostgreSQL",
    version
)]
pub struct CliArgs {
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    pub database_url: Option<String>,
    /// Listen port. Falls back to `PORT`, then 8080.
    #[arg(long = "port", value_name = "port")]
    pub port: Option<u16>,
}

/// Startup configuration errors. All of them are fatal.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// No connection string was supplied.
    #[error("database URL missing: set --database-url or DATABASE_URL")]
    MissingDatabaseUrl,
    /// The connection string was blank.
    #[error("{origin} must not be empty")]
    EmptyDatabaseUrl {
        /// Flag or variable the blank value came from.
        origin: &'static str,
    },
    /// `PORT` did not hold a valid port number.
    #[error("PORT must be a port number, got '{value}': {source}")]
    InvalidPort {
        /// Raw value of the variable.
        value: String,
        /// Parse failure.
        #[source]
        source: ParseIntError,
    },
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    database_url: String,
    port: u16,
}

impl Settings {
    /// Resolve settings from parsed arguments and the process environment.
    ///
    /// # Errors
    /// Returns [`SettingsError`] when the database URL is missing or blank, or
    /// when `PORT` is not a valid port number.
    pub fn from_args(args: CliArgs) -> Result<Self, SettingsError> {
        Ok(Self {
            database_url: resolve_database_url(args.database_url)?,
            port: resolve_port(args.port)?,
        })
    }

    /// Store connection string.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Listen port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn resolve_database_url(explicit: Option<String>) -> Result<String, SettingsError> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(SettingsError::EmptyDatabaseUrl {
                origin: "--database-url",
            });
        }
        return Ok(value);
    }

    let from_env = env::var(DATABASE_URL_ENV).map_err(|_| SettingsError::MissingDatabaseUrl)?;
    if from_env.trim().is_empty() {
        return Err(SettingsError::EmptyDatabaseUrl {
            origin: DATABASE_URL_ENV,
        });
    }
    Ok(from_env)
}

fn resolve_port(explicit: Option<u16>) -> Result<u16, SettingsError> {
    if let Some(port) = explicit {
        return Ok(port);
    }

    match env::var(PORT_ENV) {
        Ok(value) if value.trim().is_empty() => Ok(DEFAULT_PORT),
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|source| SettingsError::InvalidPort { value, source }),
        Err(_) => Ok(DEFAULT_PORT),
    }
}
