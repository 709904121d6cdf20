//! Insight domain service.
//!
//! Implements the four operations (list, lookup, create, delete) over the
//! repository port, owning timestamp assignment and the meaning of missing
//! rows.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use crate::domain::ports::{InsightRepository, InsightStoreError};
use crate::domain::{Error, Insight, InsightDraft, NewInsight};

/// Service implementing the insight operations against a repository port.
#[derive(Clone)]
pub struct InsightsService {
    repository: Arc<dyn InsightRepository>,
}

impl InsightsService {
    /// Create a new service backed by the given repository.
    pub fn new(repository: Arc<dyn InsightRepository>) -> Self {
        Self { repository }
    }

    fn map_store_error(error: InsightStoreError) -> Error {
        error!(error = %error, "insight store operation failed");
        Error::internal(error.to_string())
    }

    fn not_found(id: i64) -> Error {
        Error::not_found(format!("Insight with id {id} not found"))
    }

    /// Return every stored insight in storage-natural order.
    pub async fn list(&self) -> Result<Vec<Insight>, Error> {
        info!("Listing insights");
        self.repository.list().await.map_err(Self::map_store_error)
    }

    /// Return the insight with the given id.
    pub async fn lookup_by_id(&self, id: i64) -> Result<Insight, Error> {
        info!(id, "Looking up insight");
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_store_error)?
            .ok_or_else(|| Self::not_found(id))
    }

    /// Stamp the draft with the current time and persist it, returning the
    /// assigned id.
    ///
    /// An insert that affects zero rows is treated as a storage fault.
    pub async fn create(&self, draft: InsightDraft) -> Result<i64, Error> {
        info!(brand = %draft.brand(), text = %draft.text(), "Creating insight");
        let insight = NewInsight::from_draft(draft, Utc::now());
        self.repository
            .insert(&insight)
            .await
            .map_err(Self::map_store_error)?
            .ok_or_else(|| {
                error!("insight insert affected no rows");
                Error::internal("Failed to create insight")
            })
    }

    /// Delete the insight with the given id.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), Error> {
        info!(id, "Deleting insight");
        let affected = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(Self::map_store_error)?;
        if affected == 0 {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
