//! Driving port for filing service requests.

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Error, Submission, SubmissionId, SubmissionReceipt};

/// Use-case port invoked by inbound adapters to file a submission.
#[async_trait]
pub trait SubmissionCommand: Send + Sync {
    /// Persist the submission.
    ///
    /// # Errors
    /// Returns [`Error`] with [`crate::domain::ErrorCode::InternalError`] when
    /// the store rejects the write.
    async fn submit(&self, submission: Submission) -> Result<SubmissionReceipt, Error>;
}

/// Fixture implementation accepting every submission without storing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSubmissionCommand;

#[async_trait]
impl SubmissionCommand for FixtureSubmissionCommand {
    async fn submit(&self, _submission: Submission) -> Result<SubmissionReceipt, Error> {
        Ok(SubmissionReceipt {
            id: SubmissionId::from_raw(1),
            created_at: Utc::now(),
        })
    }
}
