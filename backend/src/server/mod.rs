//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};

use service_intake::domain::SubmissionIntakeService;
use service_intake::inbound::http::routes::build_app;
use service_intake::inbound::http::state::HttpState;

fn build_http_state(config: ServerConfig) -> web::Data<HttpState> {
    let service = SubmissionIntakeService::new(Arc::new(config.repository));
    web::Data::new(HttpState::new(Arc::new(service)))
}

/// Construct an Actix HTTP server from the given configuration.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let bind_addr = config.bind_addr;
    let http_state = build_http_state(config);

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    Ok(server)
}
