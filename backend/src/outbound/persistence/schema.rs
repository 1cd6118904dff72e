//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match [`super::CREATE_SERVICE_REQUESTS_TABLE`], which creates the
//! table at startup.

diesel::table! {
    /// Service requests filed through the web form.
    service_requests (id) {
        /// Auto-incremented primary key.
        id -> Int4,
        /// Name of the requester.
        name -> Varchar,
        /// Contact phone number, free form.
        phone -> Varchar,
        /// Requested service type, free form.
        service -> Varchar,
        /// Insertion timestamp, defaulted by the database.
        created_at -> Timestamptz,
    }
}
