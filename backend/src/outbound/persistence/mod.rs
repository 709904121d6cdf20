//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides the concrete implementation of the domain repository
//! port backed by SQLite via the Diesel ORM with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! The persistence layer follows these principles:
//!
//! - **Thin adapters**: The repository implementation only translates between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Async-safe pooling**: Connections are managed via `bb8` pools with
//!   proper async integration through `diesel-async`.
//! - **Strongly typed errors**: All database errors are mapped to domain
//!   persistence error types.
//!
//! # Example
//!
//! ```ignore
//! use insights_backend::outbound::persistence::{DbPool, PoolConfig, DieselInsightRepository};
//!
//! let config = PoolConfig::new("tmp/db.sqlite3");
//! let pool = DbPool::new(config).await?;
//! let repository = DieselInsightRepository::new(pool);
//! repository.ensure_schema().await?;
//! ```

mod diesel_insight_repository;
mod models;
mod pool;
mod schema;

pub use diesel_insight_repository::DieselInsightRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
