//! Service request submissions.
//!
//! A [`Submission`] is what a visitor files through the web form: who they
//! are, how to reach them and which service they want. Fields are free-form;
//! the only contract is that all three are present. The store assigns the
//! identifier and timestamp, returned as a [`SubmissionReceipt`].

use std::fmt;

use chrono::{DateTime, Utc};

/// A service request filed by a visitor.
///
/// # Examples
/// ```
/// use service_intake::domain::Submission;
///
/// let submission = Submission::new("Ana", "555-1234", "limpieza");
/// assert_eq!(submission.service(), "limpieza");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    name: String,
    phone: String,
    service: String,
}

impl Submission {
    /// Build a submission from its three fields.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            service: service.into(),
        }
    }

    /// Name of the person requesting the service.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact phone number, stored as given.
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    /// Requested service type, stored as given.
    pub fn service(&self) -> &str {
        self.service.as_str()
    }
}

/// Store-assigned identifier of a persisted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(i32);

impl SubmissionId {
    /// Wrap a raw identifier produced by the store.
    pub fn from_raw(value: i32) -> Self {
        Self(value)
    }

    /// Return the raw identifier.
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Values generated by the store when a submission is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Auto-incremented row identifier.
    pub id: SubmissionId,
    /// Insertion timestamp taken by the store.
    pub created_at: DateTime<Utc>,
}
