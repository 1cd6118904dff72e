//! HTTP server configuration object.

use std::net::SocketAddr;

use service_intake::outbound::persistence::DieselSubmissionRepository;

/// Everything needed to start the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) repository: DieselSubmissionRepository,
}

impl ServerConfig {
    /// Construct a server configuration around an initialised repository.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, repository: DieselSubmissionRepository) -> Self {
        Self {
            bind_addr,
            repository,
        }
    }
}
