//! Lily API Data Models
//!
//! Request/response shapes for the HTTP surface. Exactly one of the success
//! or error shape is produced per summarize call.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of a `POST /summarize` call.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SummaryRequest {
    /// Document to summarize. Arbitrary length; empty input is accepted and
    /// forwarded as-is.
    pub document_text: String,
}

/// Success shape for `POST /summarize`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    /// Provider's summary text.
    pub summary: String,
    /// Character count of the submitted document.
    pub original_length: usize,
}

/// Error shape: a human-readable description, never a raw stack trace.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Liveness message for `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}
