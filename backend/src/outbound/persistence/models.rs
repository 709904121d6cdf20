//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;

use super::schema::insights;

/// Row struct for reading from the insights table.
///
/// Timestamps are stored as RFC 3339 text and re-validated when the row is
/// converted into a domain [`crate::domain::Insight`].
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = insights)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct InsightRow {
    pub id: i64,
    pub brand: i64,
    pub created_at: String,
    pub text: String,
}

/// Insertable struct for creating new insight records.
///
/// The `id` column is omitted so SQLite assigns the rowid.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = insights)]
pub(crate) struct NewInsightRow<'a> {
    pub brand: i64,
    pub created_at: &'a str,
    pub text: &'a str,
}
