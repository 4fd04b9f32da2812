//! Process configuration.
//!
//! Everything is read once at startup into an immutable struct; request
//! handlers never look up the environment themselves.

use axum::http::HeaderValue;
use std::env;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

const DEFAULT_PORT: u16 = 8000;

/// Immutable application configuration, built once at process start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Credential for the OpenAI provider. `None` disables summarization.
    pub openai_api_key: Option<String>,
    /// Web origins permitted to make cross-origin requests.
    pub allowed_origins: Vec<String>,
    /// Deliver error bodies with HTTP 500 instead of the legacy 200 framing.
    pub strict_error_status: bool,
    /// TCP port to bind.
    pub port: u16,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let allowed_origins = env::var("LILY_ALLOWED_ORIGINS")
            .ok()
            .map(|raw| parse_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_origins);

        let strict_error_status = env::var("LILY_STRICT_ERROR_STATUS")
            .map(|raw| parse_flag(&raw))
            .unwrap_or(false);

        let port = env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            openai_api_key,
            allowed_origins,
            strict_error_status,
            port,
        }
    }

    /// CORS layer allowing only the configured origins. Methods and headers
    /// are mirrored back (all permitted for allowed origins) and credentials
    /// are allowed cross-origin.
    pub fn cors_layer(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {origin}");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }
}

fn default_origins() -> Vec<String> {
    vec![
        // Local FE development server
        "http://localhost:3000".to_string(),
        // FE production domain
        "https://lilyinit.vercel.app".to_string(),
        // GitHub Pages portfolio domain
        "https://lilyinit.github.io".to_string(),
    ]
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
