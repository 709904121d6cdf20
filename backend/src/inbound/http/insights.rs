//! Insights API handlers.
//!
//! ```text
//! GET /insights
//! GET /insights/{id}
//! POST /insights/create {"brand":0,"text":"..."}
//! DELETE /insights/delete/{id}
//! ```
//!
//! Path identifiers are extracted as raw strings so malformed values produce
//! the documented `id must be a number` response instead of Actix's default
//! path-extractor error.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Insight, InsightDraft, InsightValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, InsightSchema};
use crate::inbound::http::state::HttpState;

/// Creation request body for `POST /insights/create`.
///
/// Example JSON:
/// `{"brand":0,"text":"Customers keep asking for an export button"}`
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateInsightRequest {
    pub brand: i64,
    pub text: String,
}

impl TryFrom<CreateInsightRequest> for InsightDraft {
    type Error = InsightValidationError;

    fn try_from(value: CreateInsightRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.brand, value.text)
    }
}

fn map_validation_error(err: InsightValidationError) -> Error {
    Error::invalid_request(err.to_string())
}

fn parse_id(raw: &str) -> Result<i64, Error> {
    raw.parse::<i64>()
        .map_err(|_| Error::invalid_request("id must be a number"))
}

/// List every stored insight.
#[utoipa::path(
    get,
    path = "/insights",
    responses(
        (status = 200, description = "All insights", body = [InsightSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["insights"],
    operation_id = "listInsights"
)]
#[get("/insights")]
pub async fn list_insights(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Insight>>> {
    let insights = state.insights.list().await?;
    Ok(web::Json(insights))
}

/// Fetch a single insight by id.
#[utoipa::path(
    get,
    path = "/insights/{id}",
    params(("id" = String, Path, description = "Insight identifier")),
    responses(
        (status = 200, description = "Matching insight", body = InsightSchema),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No insight with that id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["insights"],
    operation_id = "getInsight"
)]
#[get("/insights/{id}")]
pub async fn get_insight(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Insight>> {
    let id = parse_id(&path.into_inner())?;
    let insight = state.insights.lookup_by_id(id).await?;
    Ok(web::Json(insight))
}

/// Store a new insight.
#[utoipa::path(
    post,
    path = "/insights/create",
    request_body = CreateInsightRequest,
    responses(
        (status = 201, description = "Insight stored"),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["insights"],
    operation_id = "createInsight"
)]
#[post("/insights/create")]
pub async fn create_insight(
    state: web::Data<HttpState>,
    payload: web::Json<CreateInsightRequest>,
) -> ApiResult<HttpResponse> {
    let draft = InsightDraft::try_from(payload.into_inner()).map_err(map_validation_error)?;
    state.insights.create(draft).await?;
    Ok(HttpResponse::Created().finish())
}

/// Delete an insight by id.
#[utoipa::path(
    delete,
    path = "/insights/delete/{id}",
    params(("id" = String, Path, description = "Insight identifier")),
    responses(
        (status = 204, description = "Insight removed"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No insight with that id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["insights"],
    operation_id = "deleteInsight"
)]
#[delete("/insights/delete/{id}")]
pub async fn delete_insight(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path.into_inner())?;
    state.insights.delete_by_id(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test as actix_test};
    use chrono::{DateTime, Utc};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{InsightStoreError, MockInsightRepository};
    use crate::domain::{BrandId, InsightText, InsightsService};

    fn sample_insight(id: i64) -> Insight {
        let created_at = "2024-01-15T10:30:00.000Z"
            .parse::<DateTime<Utc>>()
            .expect("valid timestamp");
        Insight::new(
            id,
            BrandId::new(2).expect("brand"),
            created_at,
            InsightText::new("retention dipped in March").expect("text"),
        )
    }

    fn test_app(
        repository: MockInsightRepository,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState::new(InsightsService::new(Arc::new(repository)));
        App::new()
            .app_data(web::Data::new(state))
            .service(list_insights)
            .service(get_insight)
            .service(create_insight)
            .service(delete_insight)
    }

    async fn json_body(response: actix_web::dev::ServiceResponse) -> Value {
        let body = actix_test::read_body(response).await;
        serde_json::from_slice(&body).expect("JSON body")
    }

    #[actix_web::test]
    async fn list_returns_camel_case_json() {
        let mut repository = MockInsightRepository::new();
        repository
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![sample_insight(1)]));

        let app = actix_test::init_service(test_app(repository)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/insights").to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        let value = json_body(response).await;
        assert_eq!(
            value,
            json!([{
                "id": 1,
                "brand": 2,
                "createdAt": "2024-01-15T10:30:00.000Z",
                "text": "retention dipped in March"
            }])
        );
    }

    #[actix_web::test]
    async fn list_maps_store_failures_to_redacted_500() {
        let mut repository = MockInsightRepository::new();
        repository
            .expect_list()
            .returning(|| Err(InsightStoreError::connection("pool exhausted")));

        let app = actix_test::init_service(test_app(repository)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/insights").to_request(),
        )
        .await;

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            json_body(response).await,
            json!({"error": "Internal server error"})
        );
    }

    #[actix_web::test]
    async fn get_returns_matching_insight() {
        let mut repository = MockInsightRepository::new();
        repository
            .expect_find_by_id()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(Some(sample_insight(7))));

        let app = actix_test::init_service(test_app(repository)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/insights/7")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        assert_eq!(json_body(response).await["id"], 7);
    }

    #[actix_web::test]
    async fn get_reports_missing_insight_as_404() {
        let mut repository = MockInsightRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let app = actix_test::init_service(test_app(repository)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/insights/42")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({"error": "Insight with id 42 not found"})
        );
    }

    #[rstest]
    #[case::word("/insights/abc")]
    #[case::trailing_garbage("/insights/12abc")]
    #[case::decimal("/insights/1.5")]
    #[actix_web::test]
    async fn get_rejects_non_numeric_id(#[case] uri: &str) {
        let mut repository = MockInsightRepository::new();
        repository.expect_find_by_id().times(0);

        let app = actix_test::init_service(test_app(repository)).await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"error": "id must be a number"})
        );
    }

    #[actix_web::test]
    async fn create_persists_draft_and_returns_created() {
        let mut repository = MockInsightRepository::new();
        repository
            .expect_insert()
            .withf(|insight| {
                insight.brand().value() == 0 && insight.text().as_ref() == "new note"
            })
            .times(1)
            .returning(|_| Ok(Some(41)));

        let app = actix_test::init_service(test_app(repository)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/insights/create")
                .set_json(json!({"brand": 0, "text": "new note"}))
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::CREATED);
        let body = actix_test::read_body(response).await;
        assert!(body.is_empty());
    }

    #[rstest]
    #[case::negative_brand(
        json!({"brand": -1, "text": "x"}),
        "brand must be a non-negative integer"
    )]
    #[case::empty_text(json!({"brand": 0, "text": ""}), "text must not be empty")]
    #[actix_web::test]
    async fn create_rejects_invalid_values(#[case] payload: Value, #[case] message: &str) {
        let mut repository = MockInsightRepository::new();
        repository.expect_insert().times(0);

        let app = actix_test::init_service(test_app(repository)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/insights/create")
                .set_json(payload)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({"error": message}));
    }

    #[actix_web::test]
    async fn create_reports_zero_row_insert_as_500() {
        let mut repository = MockInsightRepository::new();
        repository.expect_insert().returning(|_| Ok(None));

        let app = actix_test::init_service(test_app(repository)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/insights/create")
                .set_json(json!({"brand": 3, "text": "kept"}))
                .to_request(),
        )
        .await;

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            json_body(response).await,
            json!({"error": "Internal server error"})
        );
    }

    #[actix_web::test]
    async fn delete_removes_insight_and_returns_no_content() {
        let mut repository = MockInsightRepository::new();
        repository
            .expect_delete_by_id()
            .withf(|id| *id == 9)
            .times(1)
            .returning(|_| Ok(1));

        let app = actix_test::init_service(test_app(repository)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/insights/delete/9")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::NO_CONTENT);
        let body = actix_test::read_body(response).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn delete_reports_missing_insight_as_404() {
        let mut repository = MockInsightRepository::new();
        repository.expect_delete_by_id().returning(|_| Ok(0));

        let app = actix_test::init_service(test_app(repository)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/insights/delete/808")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({"error": "Insight with id 808 not found"})
        );
    }

    #[actix_web::test]
    async fn delete_rejects_non_numeric_id() {
        let mut repository = MockInsightRepository::new();
        repository.expect_delete_by_id().times(0);

        let app = actix_test::init_service(test_app(repository)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/insights/delete/oops")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"error": "id must be a number"})
        );
    }
}
