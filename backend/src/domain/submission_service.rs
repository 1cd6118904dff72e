//! Submission intake use-case.
//!
//! Logs each received submission, appends it through the repository port and
//! converts adapter failures into a redacted internal error. The adapter's
//! error text is only ever written to the log.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{SubmissionCommand, SubmissionRepository};
use crate::domain::{Error, Submission, SubmissionReceipt};

/// Domain service implementing [`SubmissionCommand`] on top of a
/// [`SubmissionRepository`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use service_intake::domain::SubmissionIntakeService;
/// use service_intake::domain::ports::SubmissionRepository;
///
/// fn wire(repository: Arc<dyn SubmissionRepository>) -> SubmissionIntakeService<dyn SubmissionRepository> {
///     SubmissionIntakeService::new(repository)
/// }
/// ```
pub struct SubmissionIntakeService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> SubmissionIntakeService<R> {
    /// Create the service around a repository implementation.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: ?Sized> Clone for SubmissionIntakeService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[async_trait]
impl<R> SubmissionCommand for SubmissionIntakeService<R>
where
    R: SubmissionRepository + ?Sized + 'static,
{
    async fn submit(&self, submission: Submission) -> Result<SubmissionReceipt, Error> {
        info!(
            service = submission.service(),
            name = submission.name(),
            phone = submission.phone(),
            "service request received"
        );

        match self.repository.insert(&submission).await {
            Ok(receipt) => {
                info!(
                    id = %receipt.id,
                    created_at = %receipt.created_at,
                    "service request stored"
                );
                Ok(receipt)
            }
            Err(err) => {
                error!(error = %err, "failed to insert service request");
                Err(Error::internal("failed to store service request"))
            }
        }
    }
}
