//! Request middleware.
//!
//! Purpose: cross-cutting response concerns applied around every route.

pub mod cors;

pub use cors::Cors;
