//! Port for submission persistence.
//!
//! The store only needs two capabilities: append a submission as a new row
//! and answer a liveness check. Rows are never read back, updated or deleted
//! through this port.

use async_trait::async_trait;

use crate::domain::{Submission, SubmissionReceipt};

use super::define_port_error;

define_port_error! {
    /// Errors raised by submission repository adapters.
    pub enum SubmissionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "submission repository connection failed: {message}",
        /// Statement failed during execution.
        Query { message: String } =>
            "submission repository query failed: {message}",
    }
}

/// Port for appending submissions to durable storage.
///
/// Inserts are not deduplicated: submitting the same values twice yields two
/// rows with distinct identifiers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Insert a submission as a new row and return the store-generated
    /// identifier and timestamp.
    async fn insert(
        &self,
        submission: &Submission,
    ) -> Result<SubmissionReceipt, SubmissionRepositoryError>;

    /// Verify the store is reachable.
    async fn ping(&self) -> Result<(), SubmissionRepositoryError>;
}
