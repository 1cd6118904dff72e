//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the [`DieselSubmissionRepository`] implementation of the domain's
//! `SubmissionRepository` port and the startup routine that opens the pool,
//! pings the server and creates the `service_requests` table.
//!
//! - Diesel row structs (`models.rs`) and the table definition (`schema.rs`)
//!   are internal and never exposed to the domain.
//! - Connections are pooled with `bb8` through `diesel-async`.
//!
//! # Example
//!
//! ```ignore
//! use service_intake::outbound::persistence::{PoolConfig, initialise_storage};
//!
//! let repository = initialise_storage(PoolConfig::new("postgres://localhost/intake")).await?;
//! ```

mod bootstrap;
mod diesel_submission_repository;
mod models;
mod pool;
mod schema;

pub use bootstrap::{CREATE_SERVICE_REQUESTS_TABLE, StorageInitError, initialise_storage};
pub use diesel_submission_repository::DieselSubmissionRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
