//! Domain ports defining the edges of the hexagon.
//!
//! [`SubmissionCommand`] is the driving port used by inbound adapters;
//! [`SubmissionRepository`] is the driven port implemented by the store
//! adapter. Adapter failures surface as strongly typed errors rather than
//! `anyhow::Result`.

mod macros;
pub(crate) use macros::define_port_error;

mod submission_command;
mod submission_repository;

pub use submission_command::{FixtureSubmissionCommand, SubmissionCommand};
#[cfg(test)]
pub use submission_repository::MockSubmissionRepository;
pub use submission_repository::{SubmissionRepository, SubmissionRepositoryError};
