//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (insights, health)
//! - **Schemas**: Domain type wrappers ([`InsightSchema`], [`ErrorSchema`])
//!   that provide OpenAPI definitions without coupling domain types to the
//!   utoipa framework, plus the adapter-level [`CreateInsightRequest`] body
//!
//! The generated specification backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::insights::CreateInsightRequest;
use crate::inbound::http::schemas::{ErrorSchema, InsightSchema};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Insights API",
        description = "HTTP interface for listing, creating, and deleting insights."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::insights::list_insights,
        crate::inbound::http::insights::get_insight,
        crate::inbound::http::insights::create_insight,
        crate::inbound::http::insights::delete_insight,
        crate::inbound::http::health::health,
    ),
    components(schemas(InsightSchema, ErrorSchema, CreateInsightRequest)),
    tags(
        (name = "insights", description = "Operations on stored insights"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
