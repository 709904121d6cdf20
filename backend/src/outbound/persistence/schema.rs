//! Diesel table definitions for the SQLite schema.
//!
//! The table is created at startup with idempotent DDL rather than a
//! migration harness; `DieselInsightRepository::ensure_schema` runs
//! [`CREATE_INSIGHTS_TABLE`] before the server accepts requests.

diesel::table! {
    /// Captured insight records.
    insights (id) {
        /// Rowid primary key, assigned by SQLite on insert.
        id -> BigInt,
        /// Numeric identifier of the brand the insight belongs to.
        brand -> BigInt,
        /// RFC 3339 creation timestamp, stored as text.
        #[sql_name = "createdAt"]
        created_at -> Text,
        /// Free-form insight body.
        text -> Text,
    }
}

/// Idempotent DDL executed at startup.
///
/// The column name `createdAt` is part of the stored format, so the Rust-side
/// snake case mapping lives in the `table!` definition above.
pub(crate) const CREATE_INSIGHTS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS insights (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    brand INTEGER NOT NULL,
    createdAt TEXT NOT NULL,
    text TEXT NOT NULL
)";

diesel::define_sql_function! {
    /// Rowid assigned by the most recent successful insert on the current
    /// connection.
    fn last_insert_rowid() -> diesel::sql_types::BigInt;
}
