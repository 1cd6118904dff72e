//! Route table for the HTTP surface.
//!
//! ```text
//! OPTIONS *               200, empty (answered by the CORS layer)
//! POST    /submit-service submit_service
//! *       /submit-service 405
//! *       *               welcome (200, plain text)
//! ```

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::Method;
use actix_web::{App, web};

use crate::inbound::http::state::HttpState;
use crate::inbound::http::submissions::{
    method_not_allowed, submission_json_config, submit_service,
};
use crate::inbound::http::welcome::welcome;
use crate::middleware::Cors;

/// Path of the submission endpoint.
pub const SUBMIT_SERVICE_PATH: &str = "/submit-service";

/// Register every route on the given service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(SUBMIT_SERVICE_PATH)
            .app_data(submission_json_config())
            .route(web::post().to(submit_service))
            .default_service(web::to(method_not_allowed))
            .wrap(Cors::with_methods([Method::POST, Method::OPTIONS])),
    )
    .default_service(web::to(welcome));
}

/// Assemble the application: shared state, application-wide CORS and the
/// route table.
pub fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .wrap(Cors::permissive())
        .configure(configure)
}
