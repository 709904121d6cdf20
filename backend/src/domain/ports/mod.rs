//! Domain ports and supporting types for the hexagonal boundary.

mod insight_repository;

pub use insight_repository::{InsightRepository, InsightStoreError};
#[cfg(test)]
pub use insight_repository::MockInsightRepository;
