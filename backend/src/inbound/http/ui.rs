//! Browser client page handler.
//!
//! The page template carries a `__BRANDS__` placeholder that is replaced once
//! with the serialised brand catalogue, so the client renders its brand
//! selector without an extra round trip.

use std::sync::OnceLock;

use actix_web::{HttpResponse, get};

use crate::client::BRANDS;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

fn rendered_page() -> &'static str {
    static PAGE: OnceLock<String> = OnceLock::new();
    PAGE.get_or_init(|| {
        // The catalogue is compile-time constant data.
        let brands = serde_json::to_string(BRANDS)
            .unwrap_or_else(|error| panic!("brand catalogue failed to serialise: {error}"));
        INDEX_HTML.replace("__BRANDS__", &brands)
    })
}

/// Serve the single-page insights client.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(rendered_page())
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test as actix_test};

    use super::*;

    #[actix_web::test]
    async fn index_serves_page_with_brand_catalogue() {
        let app = actix_test::init_service(App::new().service(index)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/").to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(actix_web::http::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("text/html; charset=utf-8")
        );
        let body = actix_test::read_body(response).await;
        let page = std::str::from_utf8(&body).expect("page is UTF-8");
        assert!(!page.contains("__BRANDS__"));
        assert!(page.contains(BRANDS[0].name));
    }
}
