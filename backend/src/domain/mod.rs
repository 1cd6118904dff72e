//! Domain primitives, services and ports for service request intake.
//!
//! Purpose: keep the submission entity and its use-case independent of
//! HTTP and SQL. Inbound adapters call [`ports::SubmissionCommand`];
//! outbound adapters implement [`ports::SubmissionRepository`].
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure payload.
//! - Submission / SubmissionReceipt — the request a visitor files and the
//!   identifiers the store assigns to it.
//! - SubmissionIntakeService — the use-case wiring both ports together.

pub mod error;
pub mod ports;
pub mod submission;
mod submission_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::submission::{Submission, SubmissionId, SubmissionReceipt};
pub use self::submission_service::SubmissionIntakeService;
