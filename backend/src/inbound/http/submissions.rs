//! Service request submission handlers.
//!
//! ```text
//! POST /submit-service  File a service request
//! *    /submit-service  405 Method Not Allowed
//! ```
//!
//! The body is decoded as JSON regardless of the `Content-Type` header.

use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError, web};
use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::domain::{Error, Submission};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::MessageResponse;
use crate::inbound::http::state::HttpState;

/// Body returned once the submission is stored.
pub const SUBMISSION_ACCEPTED_MESSAGE: &str = "Solicitud recibida con éxito!";
/// Body returned when the payload cannot be decoded.
pub const DECODE_ERROR_MESSAGE: &str = "Error al decodificar la solicitud JSON";
/// Body returned for any method other than `POST`.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Método no permitido";

/// Submission payload as sent by the web form.
///
/// Only a JSON object decodes; arrays, scalars and `null` are rejected.
/// Unknown keys are ignored and a repeated key keeps its last value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SubmissionRequest {
    /// Requester's name.
    #[serde(rename = "nombre")]
    #[schema(example = "Ana")]
    pub name: String,
    /// Contact phone number.
    #[serde(rename = "telefono")]
    #[schema(example = "555-1234")]
    pub phone: String,
    /// Requested service type.
    #[serde(rename = "servicio")]
    #[schema(example = "limpieza")]
    pub service: String,
}

impl<'de> Deserialize<'de> for SubmissionRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SubmissionRequestVisitor)
    }
}

struct SubmissionRequestVisitor;

impl<'de> Visitor<'de> for SubmissionRequestVisitor {
    type Value = SubmissionRequest;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object with nombre, telefono and servicio")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut name = None;
        let mut phone = None;
        let mut service = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "nombre" => name = Some(map.next_value::<String>()?),
                "telefono" => phone = Some(map.next_value::<String>()?),
                "servicio" => service = Some(map.next_value::<String>()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(SubmissionRequest {
            name: name.ok_or_else(|| <A::Error as de::Error>::missing_field("nombre"))?,
            phone: phone.ok_or_else(|| <A::Error as de::Error>::missing_field("telefono"))?,
            service: service.ok_or_else(|| <A::Error as de::Error>::missing_field("servicio"))?,
        })
    }
}

impl From<SubmissionRequest> for Submission {
    fn from(value: SubmissionRequest) -> Self {
        let SubmissionRequest {
            name,
            phone,
            service,
        } = value;
        Self::new(name, phone, service)
    }
}

/// JSON extractor configuration for the submission endpoint.
///
/// Accepts any content type and maps every decoding failure (malformed JSON,
/// wrong field types, missing fields, empty body) to a 400 response.
pub fn submission_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            debug!(error = %err, "rejected undecodable service request");
            Error::invalid_request(DECODE_ERROR_MESSAGE).into()
        })
}

/// File a service request.
///
/// # Errors
///
/// - `400 Bad Request`: body is not a JSON object with three string fields.
/// - `500 Internal Server Error`: the store rejected the insert.
#[utoipa::path(
    post,
    path = "/submit-service",
    request_body = SubmissionRequest,
    responses(
        (status = 200, description = "Submission stored", body = MessageResponse),
        (status = 400, description = "Undecodable payload", body = MessageResponse),
        (status = 405, description = "Method not allowed", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tags = ["submissions"],
    operation_id = "submitService"
)]
pub async fn submit_service(
    state: web::Data<HttpState>,
    payload: web::Json<SubmissionRequest>,
) -> ApiResult<HttpResponse> {
    state.submissions.submit(payload.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(SUBMISSION_ACCEPTED_MESSAGE)))
}

/// Reject every method the submission endpoint does not serve.
pub async fn method_not_allowed(request: HttpRequest) -> HttpResponse {
    warn!(method = %request.method(), path = request.path(), "method not allowed");
    HttpResponse::MethodNotAllowed().json(MessageResponse::new(METHOD_NOT_ALLOWED_MESSAGE))
}

#[cfg(test)]
mod tests;
