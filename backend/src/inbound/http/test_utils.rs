//! Test helpers for inbound HTTP components.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{SubmissionRepository, SubmissionRepositoryError};
use crate::domain::{Submission, SubmissionId, SubmissionIntakeService, SubmissionReceipt};
use crate::inbound::http::state::HttpState;

/// In-memory repository recording every inserted submission.
///
/// Optionally fails every insert with a fixed error to simulate a lost
/// connection.
#[derive(Default)]
pub struct InMemorySubmissionRepository {
    rows: Mutex<Vec<Submission>>,
    failure: Option<SubmissionRepositoryError>,
}

impl InMemorySubmissionRepository {
    /// Repository whose inserts always fail with `failure`.
    pub fn failing(failure: SubmissionRepositoryError) -> Self {
        Self {
            rows: Mutex::default(),
            failure: Some(failure),
        }
    }

    /// Snapshot of the stored rows.
    pub fn rows(&self) -> Vec<Submission> {
        self.rows.lock().expect("rows lock poisoned").clone()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn insert(
        &self,
        submission: &Submission,
    ) -> Result<SubmissionReceipt, SubmissionRepositoryError> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        let mut rows = self.rows.lock().expect("rows lock poisoned");
        rows.push(submission.clone());
        let id = i32::try_from(rows.len()).expect("row count fits in i32");
        Ok(SubmissionReceipt {
            id: SubmissionId::from_raw(id),
            created_at: Utc::now(),
        })
    }

    async fn ping(&self) -> Result<(), SubmissionRepositoryError> {
        Ok(())
    }
}

/// Build HTTP state running the real intake service over `repository`.
pub fn state_over(repository: Arc<InMemorySubmissionRepository>) -> HttpState {
    HttpState::new(Arc::new(SubmissionIntakeService::new(repository)))
}
