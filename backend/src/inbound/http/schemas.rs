//! JSON bodies shared by the HTTP handlers.
//!
//! Every JSON response, successful or not, is a single `message` field so
//! browser clients can display it directly.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status message returned by the submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable status text.
    #[schema(example = "Solicitud recibida con éxito!")]
    pub message: String,
}

impl MessageResponse {
    /// Build a response body from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
