//! Default handler for every path other than the submission endpoint.

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;

/// Plain-text usage hint returned by the default route.
pub const WELCOME_MESSAGE: &str =
    "Bienvenido a la API de servicios. Usa /submit-service para enviar datos.";

/// Answer unknown paths with the usage hint.
///
/// Unknown paths answer 200, not 404.
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(WELCOME_MESSAGE)
}
