//! Liveness route.

use axum::{routing::get, Json, Router};

use crate::models::HealthResponse;
use crate::AppState;

/// Basic health check endpoint.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn read_root() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Lily AI Backend API is running!".to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(read_root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SummaryService;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn root_returns_the_fixed_liveness_message() {
        // Liveness does not depend on provider configuration
        let state = AppState {
            summary_service: Arc::new(SummaryService::new(None)),
            strict_error_status: false,
        };
        let app = router().with_state(state);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Lily AI Backend API is running!");
    }
}
