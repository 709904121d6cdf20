//! Health probe handler.

use actix_web::{HttpResponse, get, http::header};

/// Liveness probe. Returns a plain `OK` body while the process is serving.
#[utoipa::path(
    get,
    path = "/_health",
    tags = ["health"],
    responses((status = 200, description = "Server is serving traffic"))
)]
#[get("/_health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body("OK")
}
