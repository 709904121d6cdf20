//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{Error, InsightsService};
use crate::inbound::http::health::health;
use crate::inbound::http::insights::{create_insight, delete_insight, get_insight, list_insights};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ui::index;
use crate::outbound::persistence::DieselInsightRepository;

/// Dependency bundle cloned into each worker's app instance.
#[derive(Clone)]
pub struct AppDependencies {
    http_state: web::Data<HttpState>,
}

impl AppDependencies {
    /// Bundle the HTTP state for app construction.
    #[must_use]
    pub fn new(http_state: web::Data<HttpState>) -> Self {
        Self { http_state }
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| Error::invalid_request(format!("Invalid payload: {err}")).into())
}

/// Assemble the application: routes and middleware over shared state.
///
/// Exposed so integration tests drive the exact app the server runs.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies { http_state } = deps;

    let app = App::new()
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(index)
        .service(health)
        .service(list_insights)
        .service(get_insight)
        .service(create_insight)
        .service(delete_insight);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, pool } = config;

    let repository = DieselInsightRepository::new(pool);
    let service = InsightsService::new(Arc::new(repository));
    let http_state = web::Data::new(HttpState::new(service));

    let server = HttpServer::new(move || build_app(AppDependencies::new(http_state.clone())))
        .bind(bind_addr)?
        .run();

    Ok(server)
}
