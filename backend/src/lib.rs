//! Service request intake backend.
//!
//! Accepts service request submissions over HTTP and appends them to a
//! PostgreSQL table. Layout follows a hexagonal split: [`domain`] holds the
//! use-case and ports, [`inbound`] the HTTP adapter, [`outbound`] the Diesel
//! adapter.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
pub use middleware::Cors;
