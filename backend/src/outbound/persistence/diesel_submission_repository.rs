//! PostgreSQL-backed `SubmissionRepository` implementation using Diesel ORM.
//!
//! Inserts are parameterized through Diesel's query builder; the database
//! fills in `id` and `created_at` and hands them back via `RETURNING`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{SubmissionRepository, SubmissionRepositoryError};
use crate::domain::{Submission, SubmissionId, SubmissionReceipt};

use super::bootstrap::CREATE_SERVICE_REQUESTS_TABLE;
use super::models::{InsertedServiceRequestRow, NewServiceRequestRow};
use super::pool::{DbPool, PoolError};
use super::schema::service_requests;

/// Diesel-backed implementation of the `SubmissionRepository` port.
#[derive(Clone)]
pub struct DieselSubmissionRepository {
    pool: DbPool,
}

impl DieselSubmissionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the `service_requests` table when it does not exist yet.
    ///
    /// # Errors
    /// Returns [`SubmissionRepositoryError`] when a connection cannot be
    /// checked out or the DDL statement fails.
    pub async fn ensure_schema(&self) -> Result<(), SubmissionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::sql_query(CREATE_SERVICE_REQUESTS_TABLE)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}

fn map_pool_error(error: PoolError) -> SubmissionRepositoryError {
    SubmissionRepositoryError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> SubmissionRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            SubmissionRepositoryError::connection("database connection closed")
        }
        DieselError::DatabaseError(_, info) => SubmissionRepositoryError::query(info.message()),
        other => SubmissionRepositoryError::query(other.to_string()),
    }
}

#[async_trait]
impl SubmissionRepository for DieselSubmissionRepository {
    async fn insert(
        &self,
        submission: &Submission,
    ) -> Result<SubmissionReceipt, SubmissionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewServiceRequestRow {
            name: submission.name(),
            phone: submission.phone(),
            service: submission.service(),
        };

        let inserted: InsertedServiceRequestRow = diesel::insert_into(service_requests::table)
            .values(&row)
            .returning(InsertedServiceRequestRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(SubmissionReceipt {
            id: SubmissionId::from_raw(inserted.id),
            created_at: inserted.created_at,
        })
    }

    async fn ping(&self) -> Result<(), SubmissionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
