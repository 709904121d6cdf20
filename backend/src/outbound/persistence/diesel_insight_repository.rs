//! SQLite-backed implementation of the insight repository port.
//!
//! Adapter responsibilities end at translating between Diesel rows and domain
//! types; row-presence decisions (not found, zero rows affected) are returned
//! as data for the domain service to interpret.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::insight::format_created_at;
use crate::domain::ports::{InsightRepository, InsightStoreError};
use crate::domain::{BrandId, Insight, InsightText, NewInsight};

use super::models::{InsightRow, NewInsightRow};
use super::pool::{DbPool, PoolError};
use super::schema::{CREATE_INSIGHTS_TABLE, insights, last_insert_rowid};

/// Diesel-based implementation of [`InsightRepository`] for SQLite.
#[derive(Clone)]
pub struct DieselInsightRepository {
    pool: DbPool,
}

impl DieselInsightRepository {
    /// Create a new repository backed by the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the insights table if it does not already exist.
    ///
    /// Called once at startup, before the server accepts requests.
    ///
    /// # Errors
    ///
    /// Returns [`InsightStoreError`] if a connection cannot be checked out or
    /// the DDL fails.
    pub async fn ensure_schema(&self) -> Result<(), InsightStoreError> {
        use diesel_async::SimpleAsyncConnection;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        conn.batch_execute(CREATE_INSIGHTS_TABLE)
            .await
            .map_err(map_diesel_error)
    }
}

/// Convert pool errors to store errors.
fn map_pool_error(error: PoolError) -> InsightStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            InsightStoreError::connection(message)
        }
    }
}

/// Convert Diesel errors to store errors.
///
/// The raw driver message is logged at debug level; the returned error carries
/// a stable description so callers never leak SQL details.
fn map_diesel_error(error: diesel::result::Error) -> InsightStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(kind, info) = &error {
        debug!(?kind, message = info.message(), "diesel operation failed");
    } else {
        debug!(error = %error, "diesel operation failed");
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            InsightStoreError::connection("database connection error")
        }
        _ => InsightStoreError::query("database error"),
    }
}

/// Convert a database row into a domain insight.
///
/// Stored values have already passed validation on the way in, so a failure
/// here means the database content was modified out of band.
fn row_to_insight(row: InsightRow) -> Result<Insight, InsightStoreError> {
    let created_at = DateTime::parse_from_rfc3339(&row.created_at)
        .map_err(|err| {
            InsightStoreError::query(format!("row {} has invalid createdAt: {err}", row.id))
        })?
        .with_timezone(&Utc);
    let brand = BrandId::new(row.brand).map_err(|err| {
        InsightStoreError::query(format!("row {} has invalid brand: {err}", row.id))
    })?;
    let text = InsightText::new(row.text).map_err(|err| {
        InsightStoreError::query(format!("row {} has invalid text: {err}", row.id))
    })?;
    Ok(Insight::new(row.id, brand, created_at, text))
}

#[async_trait]
impl InsightRepository for DieselInsightRepository {
    async fn list(&self) -> Result<Vec<Insight>, InsightStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<InsightRow> = insights::table
            .select(InsightRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_insight).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Insight>, InsightStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = insights::table
            .find(id)
            .select(InsightRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_insight).transpose()
    }

    async fn insert(&self, insight: &NewInsight) -> Result<Option<i64>, InsightStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let created_at = format_created_at(insight.created_at());
        let row = NewInsightRow {
            brand: insight.brand().value(),
            created_at: &created_at,
            text: insight.text().as_ref(),
        };

        let affected = diesel::insert_into(insights::table)
            .values(row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if affected == 0 {
            return Ok(None);
        }

        // Same checkout as the insert, so the rowid belongs to this
        // connection.
        let id = diesel::select(last_insert_rowid())
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(Some(id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<usize, InsightStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(insights::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
