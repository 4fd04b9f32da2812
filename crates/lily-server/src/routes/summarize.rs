//! Summarization route.
//!
//! Errors are recovered into the JSON error shape here; the process never
//! surfaces a raw failure to the caller. By default the error body ships
//! with HTTP 200 (the framing legacy clients expect); `strict_error_status`
//! switches that to 500.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use crate::models::{ErrorResponse, SummaryRequest, SummaryResponse};
use crate::AppState;

/// Summarizes the submitted document through the configured provider.
#[utoipa::path(
    post,
    path = "/summarize",
    request_body = SummaryRequest,
    responses(
        (status = 200, description = "Summary produced, or an error body when the provider is unconfigured or fails", body = SummaryResponse),
        (status = 500, description = "Error body, only when strict error status is enabled", body = ErrorResponse)
    ),
    tag = "Summarize"
)]
pub async fn summarize_document(
    State(state): State<AppState>,
    Json(payload): Json<SummaryRequest>,
) -> Response {
    match state
        .summary_service
        .summarize(&payload.document_text)
        .await
    {
        Ok(summary) => Json(SummaryResponse {
            summary: summary.summary,
            original_length: summary.original_length,
        })
        .into_response(),
        Err(err) => {
            tracing::warn!("Summarization failed: {err}");
            let status = if state.strict_error_status {
                StatusCode::INTERNAL_SERVER_ERROR
            } else {
                StatusCode::OK
            };
            (
                status,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/summarize", post(summarize_document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SummaryService;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use lily::{ProviderError, SummaryProvider};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubProvider {
        reply: Result<String, ProviderError>,
    }

    #[async_trait]
    impl SummaryProvider for StubProvider {
        async fn summarize(&self, _prompt: &str) -> Result<String, ProviderError> {
            self.reply.clone()
        }

        fn provider_name(&self) -> &str {
            "stub"
        }

        fn model_id(&self) -> &str {
            "stub-model"
        }
    }

    fn app_with(provider: Option<Arc<dyn SummaryProvider>>, strict: bool) -> Router {
        let state = AppState {
            summary_service: Arc::new(SummaryService::new(provider)),
            strict_error_status: strict,
        };
        router().with_state(state)
    }

    fn summarize_request(document_text: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/summarize")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({ "document_text": document_text }).to_string(),
            ))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn success_returns_summary_and_original_length() {
        let provider = Arc::new(StubProvider {
            reply: Ok("A short greeting.".to_string()),
        });
        let app = app_with(Some(provider), false);

        let response = app.oneshot(summarize_request("Hello world.")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["summary"], "A short greeting.");
        assert_eq!(json["original_length"], 12);
    }

    #[tokio::test]
    async fn missing_credential_returns_error_body_with_success_framing() {
        let app = app_with(None, false);

        let response = app.oneshot(summarize_request("some text")).await.unwrap();

        // Legacy behavior: the error ships in the body, not the status code
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "OpenAI API Key is not configured in the environment."
        );
        assert!(json.get("summary").is_none());
    }

    #[tokio::test]
    async fn strict_error_status_delivers_500() {
        let app = app_with(None, true);

        let response = app.oneshot(summarize_request("some text")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "OpenAI API Key is not configured in the environment."
        );
    }

    #[tokio::test]
    async fn provider_failure_is_described_and_service_keeps_serving() {
        let provider = Arc::new(StubProvider {
            reply: Err(ProviderError::Request("connection refused".to_string())),
        });
        let app = app_with(Some(provider), false);

        let response = app
            .clone()
            .oneshot(summarize_request("doc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "An error occurred during summarization: Request failed: connection refused"
        );

        // A failed call must not wedge subsequent requests
        let second = app.oneshot(summarize_request("doc")).await.unwrap();
        assert_eq!(second.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn empty_document_is_forwarded_and_reports_zero_length() {
        let provider = Arc::new(StubProvider {
            reply: Ok("nothing to summarize".to_string()),
        });
        let app = app_with(Some(provider), false);

        let response = app.oneshot(summarize_request("")).await.unwrap();

        let json = body_json(response).await;
        assert_eq!(json["original_length"], 0);
    }

    #[tokio::test]
    async fn multibyte_document_reports_character_count() {
        let provider = Arc::new(StubProvider {
            reply: Ok("greeting".to_string()),
        });
        let app = app_with(Some(provider), false);

        let response = app.oneshot(summarize_request("안녕하세요")).await.unwrap();

        let json = body_json(response).await;
        assert_eq!(json["original_length"], 5);
    }

    #[tokio::test]
    async fn identical_requests_yield_identical_original_length() {
        let provider = Arc::new(StubProvider {
            reply: Ok("deterministic".to_string()),
        });
        let app = app_with(Some(provider), false);

        let first = body_json(
            app.clone()
                .oneshot(summarize_request("same document"))
                .await
                .unwrap(),
        )
        .await;
        let second = body_json(app.oneshot(summarize_request("same document")).await.unwrap()).await;

        assert_eq!(first["original_length"], second["original_length"]);
    }
}
