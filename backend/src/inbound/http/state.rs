//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain service and remain testable without real storage.

use crate::domain::InsightsService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub insights: InsightsService,
}

impl HttpState {
    /// Construct state around the insights service.
    pub fn new(insights: InsightsService) -> Self {
        Self { insights }
    }
}
