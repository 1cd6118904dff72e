//! Internal Diesel row structs for the `service_requests` table.
//!
//! Implementation details of the persistence layer; never exposed to the
//! domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::service_requests;

/// Insertable struct for appending a service request. `id` and
/// `created_at` are left to the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = service_requests)]
pub(crate) struct NewServiceRequestRow<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub service: &'a str,
}

/// Store-generated columns returned by the insert.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = service_requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct InsertedServiceRequestRow {
    pub id: i32,
    pub created_at: DateTime<Utc>,
}
