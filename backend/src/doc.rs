//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] describes the submission endpoint and its JSON bodies. It is
//! exported by `cargo run --bin openapi-dump`; the server does not serve it.

use utoipa::OpenApi;

use crate::inbound::http::schemas::MessageResponse;
use crate::inbound::http::submissions::SubmissionRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Service intake API",
        description = "Accepts service request submissions from the public web form."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(crate::inbound::http::submissions::submit_service),
    components(schemas(SubmissionRequest, MessageResponse)),
    tags(
        (name = "submissions", description = "Service request intake")
    )
)]
pub struct ApiDoc;
