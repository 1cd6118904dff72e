//! Storage initialisation run once before the server accepts traffic.
//!
//! Opens the pool, pings the database and creates the `service_requests`
//! table if absent. Every failure is fatal to startup; nothing is retried.

use thiserror::Error;
use tracing::info;

use crate::domain::ports::{SubmissionRepository, SubmissionRepositoryError};

use super::diesel_submission_repository::DieselSubmissionRepository;
use super::pool::{DbPool, PoolConfig, PoolError};

/// DDL creating the submissions table. No migration or versioning exists.
pub const CREATE_SERVICE_REQUESTS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS service_requests (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    phone VARCHAR(255) NOT NULL,
    service VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

/// Startup failures raised while preparing the store.
#[derive(Debug, Error)]
pub enum StorageInitError {
    /// The connection string was blank.
    #[error("database URL must not be empty")]
    MissingDatabaseUrl,
    /// The pool could not be built.
    #[error("error connecting to the database: {0}")]
    Pool(#[from] PoolError),
    /// The database did not answer the liveness check.
    #[error("error pinging the database: {0}")]
    Ping(#[source] SubmissionRepositoryError),
    /// The submissions table could not be created.
    #[error("error creating table 'service_requests': {0}")]
    Schema(#[source] SubmissionRepositoryError),
}

/// Open the store, verify it is reachable and ensure the schema exists.
///
/// # Errors
/// Returns a [`StorageInitError`] describing the first step that failed.
pub async fn initialise_storage(
    config: PoolConfig,
) -> Result<DieselSubmissionRepository, StorageInitError> {
    if config.database_url().trim().is_empty() {
        return Err(StorageInitError::MissingDatabaseUrl);
    }

    let pool = DbPool::new(config).await?;
    let repository = DieselSubmissionRepository::new(pool);

    repository.ping().await.map_err(StorageInitError::Ping)?;
    info!("database connection established");

    repository
        .ensure_schema()
        .await
        .map_err(StorageInitError::Schema)?;
    info!(table = "service_requests", "table verified or created");

    Ok(repository)
}
