//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the wire shape of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Insight`].
///
/// A stored insight as returned by the list and lookup endpoints.
#[derive(ToSchema)]
#[schema(as = crate::domain::Insight, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct InsightSchema {
    /// Storage-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    /// Numeric identifier of the associated brand.
    #[schema(example = 0)]
    brand: i64,
    /// Creation timestamp in RFC 3339 format.
    #[schema(example = "2024-01-15T10:30:00.000Z")]
    created_at: String,
    /// Insight content.
    #[schema(example = "Customers keep asking for an export button")]
    text: String,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload; the body carries the message only, while the
/// correlation identifier travels in the `trace-id` response header.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message describing the failure.
    #[schema(example = "Insight with id 9 not found")]
    error: String,
}
