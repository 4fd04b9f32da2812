//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa, served as plain JSON.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::models::{ErrorResponse, HealthResponse, SummaryRequest, SummaryResponse};
use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(super::health::read_root, super::summarize::summarize_document),
    components(schemas(SummaryRequest, SummaryResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Summarize", description = "Document summarization")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}
