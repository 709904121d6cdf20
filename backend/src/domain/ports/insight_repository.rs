//! Port for insight persistence.
//!
//! The [`InsightRepository`] trait defines the storage contract for insight
//! rows. Adapters implement it with durable storage (SQLite in production);
//! tests can substitute a mock.

use async_trait::async_trait;

use crate::domain::{Insight, NewInsight};

/// Errors raised by insight repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsightStoreError {
    /// Repository connection could not be established.
    #[error("insight store connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("insight store query failed: {message}")]
    Query { message: String },
}

impl InsightStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for insight storage and retrieval.
///
/// Each method issues a single statement; there are no cross-call
/// transactions. Row-presence decisions (not-found, zero rows affected) are
/// reported as data, not errors, so the service layer owns their meaning.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InsightRepository: Send + Sync {
    /// Fetch every stored insight in storage-natural order.
    async fn list(&self) -> Result<Vec<Insight>, InsightStoreError>;

    /// Fetch the insight with the given id.
    ///
    /// Returns `None` when no row matches.
    async fn find_by_id(&self, id: i64) -> Result<Option<Insight>, InsightStoreError>;

    /// Insert a new row and return its assigned id.
    ///
    /// Returns `None` when the insert reported zero affected rows.
    async fn insert(&self, insight: &NewInsight) -> Result<Option<i64>, InsightStoreError>;

    /// Delete the row with the given id, returning the number of rows
    /// affected.
    async fn delete_by_id(&self, id: i64) -> Result<usize, InsightStoreError>;
}
