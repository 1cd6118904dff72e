//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` so they only depend on
//! the domain's driving port and stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::SubmissionCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Use-case filing service requests.
    pub submissions: Arc<dyn SubmissionCommand>,
}

impl HttpState {
    /// Construct state from the submission use-case.
    pub fn new(submissions: Arc<dyn SubmissionCommand>) -> Self {
        Self { submissions }
    }
}
