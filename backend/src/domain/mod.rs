//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed domain entities shared by every layer of
//! the application. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - **Errors**: [`Error`] and [`ErrorCode`], the failure taxonomy shared by
//!   every layer.
//! - **Entities**: [`Insight`] and its value types.
//! - **Services**: [`InsightsService`], the operations over the repository
//!   port.

pub mod error;
pub mod insight;
pub mod insights_service;
pub mod ports;

pub use self::error::{Error, ErrorCode};
pub use self::insight::{
    BrandId, Insight, InsightDraft, InsightText, InsightValidationError, NewInsight,
};
pub use self::insights_service::InsightsService;
