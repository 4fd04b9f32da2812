use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::OpenAiProvider;
use application::SummaryService;
use config::AppConfig;
use lily::SummaryProvider;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub summary_service: Arc<SummaryService>,
    /// When true, error bodies are delivered with HTTP 500 instead of the
    /// legacy 200 framing. Defaults to false for client compatibility.
    pub strict_error_status: bool,
}

/// Builds the full router: routes, request tracing, and the CORS allow-list.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::summarize::router())
        .merge(routes::swagger::router())
        .layer(TraceLayer::new_for_http())
        .layer(config.cors_layer())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env (local development only; in
    // production the key arrives via the process environment).
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Lily backend initializing...");

    let config = AppConfig::from_env();

    // Initialize the OpenAI provider if configured. With no key the service
    // stays up and reports a configuration error on each summarize call.
    let provider: Option<Arc<dyn SummaryProvider>> = config.openai_api_key.as_ref().map(|key| {
        let provider = OpenAiProvider::new(key.clone());
        tracing::info!(
            "Summarization provider initialized: {} ({})",
            provider.provider_name(),
            provider.model_id()
        );
        Arc::new(provider) as Arc<dyn SummaryProvider>
    });

    if provider.is_none() {
        tracing::warn!("No OPENAI_API_KEY set - summarize calls will report a configuration error");
    }

    let state = AppState {
        summary_service: Arc::new(SummaryService::new(provider)),
        strict_error_status: config.strict_error_status,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Lily backend listening on {addr}");

    axum::serve(listener, app(state, &config)).await?;

    Ok(())
}
