//! HTTP inbound adapter exposing the intake endpoints.

pub mod error;
pub mod routes;
pub mod schemas;
pub mod state;
pub mod submissions;
#[cfg(test)]
pub mod test_utils;
pub mod welcome;

pub use error::ApiResult;
