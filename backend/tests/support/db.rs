//! Shared SQLite fixtures for the integration suites.
//!
//! Each call provisions a fresh database file inside a temporary directory,
//! so row ids always start from one and suites never observe each other's
//! state.

use insights_backend::outbound::persistence::{DbPool, DieselInsightRepository, PoolConfig};
use tempfile::TempDir;

/// A pooled repository backed by a throwaway database file.
///
/// The temporary directory is dropped with this struct, removing the file.
pub struct TempDatabase {
    pub repository: DieselInsightRepository,
    _dir: TempDir,
}

/// Create a fresh on-disk database with the insights table in place.
pub async fn temp_database() -> TempDatabase {
    let dir = TempDir::new().expect("create temporary directory");
    let path = dir.path().join("insights.sqlite3");
    let config = PoolConfig::new(path.to_string_lossy())
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = DbPool::new(config).await.expect("create pool");
    let repository = DieselInsightRepository::new(pool);
    repository.ensure_schema().await.expect("create schema");

    TempDatabase {
        repository,
        _dir: dir,
    }
}
